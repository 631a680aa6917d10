//! [`Page`] coordinator owning the interactive state.
//!
//! Everything mutable the page has — the listing collection, the filter
//! panel, the advert form, the rendered pins — is explicit state owned
//! here and handed to collaborators by reference; there are no ambient
//! globals.

use service::{
    command::{self, SubmitListing},
    domain::Listing,
    filter::{self, Criteria},
    form::Form,
    infra::transport,
    query,
    store::{self, Store},
    upload::{self, FileUpload},
    Command, Query, Service,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    map::{MapCanvas, Pin, Position},
    notify::{Notification, Notifier},
};

/// Coordinator of the page.
///
/// Owns the listing [`Store`], the filter [`filter::Panel`], the advert
/// [`Form`] and the presentation handles, and keeps them consistent
/// whichever of them the user interacts with.
#[derive(Debug)]
pub struct Page<T, C, N> {
    /// [`Service`] executing the remote operations.
    service: Service<T>,

    /// [`Store`] of the authoritative listing collection.
    store: Store,

    /// Filter panel state.
    panel: filter::Panel,

    /// Advert form state.
    form: Form,

    /// Map canvas the pins are rendered onto.
    canvas: C,

    /// Sink of user-visible notifications.
    notifier: N,

    /// Initial [`Position`] of the draggable main marker.
    initial_marker: Position,

    /// Indicator whether a submission is currently outstanding.
    ///
    /// At most one submission is in flight at a time; the flag is only
    /// cleared once the previous call settles.
    submit_in_flight: bool,
}

impl<T, C: MapCanvas, N: Notifier> Page<T, C, N> {
    /// Creates a new inactive [`Page`] with the provided collaborators.
    pub fn new(
        service: Service<T>,
        canvas: C,
        notifier: N,
        initial_marker: Position,
    ) -> Self {
        Self {
            service,
            store: Store::default(),
            panel: filter::Panel::default(),
            form: Form::new(),
            canvas,
            notifier,
            initial_marker,
            submit_in_flight: false,
        }
    }

    /// Activates the page.
    ///
    /// Loads the listing collection (falling back to generated data on
    /// any transport failure, surfacing the failure exactly once),
    /// activates the filter panel, places the main marker and renders the
    /// initial visible set.
    pub async fn activate(&mut self)
    where
        Service<T>: Query<
                query::connectivity::Probe,
                Ok = bool,
                Err = Traced<transport::Error>,
            > + Query<
                query::listings::Load,
                Ok = Vec<Listing>,
                Err = Traced<transport::Error>,
            >,
    {
        let store::LoadOutcome { source, detail } =
            self.store.load(&self.service).await;
        if let Some(detail) = detail {
            self.notifier.notify(Notification::LoadFailed(detail));
        }
        log::debug!("collection loaded from {source:?}");

        self.panel.activate();
        self.canvas.render_main_marker(self.initial_marker);
        self.form.set_address(self.initial_marker.address());
        self.render();
    }

    /// Applies the provided filter [`Criteria`].
    ///
    /// No-ops (with a log line) while the panel is inactive; otherwise
    /// triggers exactly one re-render of the visible set.
    pub fn apply_criteria(&mut self, criteria: Criteria) {
        if !self.panel.set(criteria) {
            log::warn!("filters are inactive, ignoring the criteria change");
            return;
        }
        self.render();
    }

    /// Resets the filter panel to its default criteria, re-rendering the
    /// visible set.
    pub fn reset_filters(&mut self) {
        if !self.panel.is_active() {
            log::warn!("filters are inactive, nothing to reset");
            return;
        }
        self.panel.reset();
        self.render();
    }

    /// Routes a moved main marker into the form's address field.
    pub fn on_main_marker_moved(&mut self, position: Position) {
        self.form.set_address(position.address());
    }

    /// Attaches an avatar image to the form, surfacing a rejected file to
    /// the user instead of touching any state.
    ///
    /// An accepted file is handed to the preview renderer as a `data:`
    /// URI.
    pub fn attach_avatar(&mut self, file: FileUpload) {
        if let Err(e) = self.form.attach_avatar(file) {
            self.notifier.notify(Notification::FileRejected(e.to_string()));
        } else if let Some(avatar) = self.form.avatar() {
            log::debug!(
                "avatar preview ready ({} characters)",
                upload::preview(avatar).len(),
            );
        }
    }

    /// Attaches an offer photo to the form, surfacing a rejected file to
    /// the user instead of touching any state.
    ///
    /// An accepted file is handed to the preview renderer as a `data:`
    /// URI.
    pub fn attach_photo(&mut self, file: FileUpload) {
        if let Err(e) = self.form.attach_photo(file) {
            self.notifier.notify(Notification::FileRejected(e.to_string()));
        } else if let Some(photo) = self.form.photos().last() {
            log::debug!(
                "photo preview ready ({} characters)",
                upload::preview(photo).len(),
            );
        }
    }

    /// Submits the advert form.
    ///
    /// The network call is only issued once the aggregate validator
    /// passes and no other submission is outstanding. Success resets the
    /// form, the filters and the main marker to their initial state;
    /// failure surfaces the endpoint's detail and keeps the form
    /// populated for a retry.
    ///
    /// Returns whether the submission was accepted.
    pub async fn submit(&mut self) -> bool
    where
        Service<T>:
            Command<SubmitListing, Ok = (), Err = Traced<transport::Error>>,
    {
        if self.submit_in_flight {
            log::warn!("a submission is already in flight");
            return false;
        }
        let Some(submission) = self.form.submission() else {
            self.notifier.notify(Notification::FormInvalid);
            return false;
        };

        self.submit_in_flight = true;
        let result =
            self.service.execute(command::SubmitListing(submission)).await;
        self.submit_in_flight = false;

        match result {
            Ok(()) => {
                self.form.reset();
                self.panel.reset();
                self.canvas.render_main_marker(self.initial_marker);
                self.form.set_address(self.initial_marker.address());
                self.render();
                self.notifier.notify(Notification::SubmitSucceeded);
                true
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::SubmitFailed(e.as_ref().detail()));
                false
            }
        }
    }

    /// Returns the [`Store`] of this [`Page`].
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the filter panel of this [`Page`].
    #[must_use]
    pub fn panel(&self) -> &filter::Panel {
        &self.panel
    }

    /// Returns the advert [`Form`] of this [`Page`].
    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the advert [`Form`] of this [`Page`] for editing.
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Recomputes the visible set from the current criteria and renders
    /// it onto the canvas.
    ///
    /// The previous pin set is always fully discarded first: exactly one
    /// clear-and-rebuild notification per state change, never an
    /// incremental patch.
    fn render(&mut self) {
        let visible =
            filter::apply(self.panel.criteria(), self.store.listings());
        let pins: Vec<Pin> = visible.iter().filter_map(Pin::of).collect();
        self.canvas.clear_pins();
        self.canvas.render_pins(&pins);
    }
}
