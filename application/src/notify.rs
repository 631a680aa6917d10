//! User-visible notifications.

use derive_more::Display;
use tracing as log;

/// User-visible notification message.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Notification {
    /// Listing collection failed to load and was replaced with generated
    /// data.
    #[display("failed to load listings, showing generated data: {_0}")]
    LoadFailed(String),

    /// Submission was rejected by the remote endpoint; the form keeps its
    /// values for a retry.
    #[display("failed to publish the advert: {_0}")]
    SubmitFailed(String),

    /// Submission was accepted by the remote endpoint.
    #[display("the advert has been published")]
    SubmitSucceeded,

    /// Form still has validation errors blocking the submission.
    #[display("please fix the form errors first")]
    FormInvalid,

    /// Uploaded file was rejected before any preview was touched.
    #[display("file rejected: {_0}")]
    FileRejected(String),
}

/// Sink of user-visible [`Notification`]s.
pub trait Notifier {
    /// Shows the provided [`Notification`] to the user.
    fn notify(&mut self, notification: Notification);
}

/// [`Notifier`] surfacing notifications in the log output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceNotifier;

impl Notifier for TraceNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::SubmitSucceeded => log::info!("{notification}"),
            Notification::LoadFailed(_)
            | Notification::SubmitFailed(_)
            | Notification::FormInvalid
            | Notification::FileRejected(_) => log::warn!("{notification}"),
        }
    }
}
