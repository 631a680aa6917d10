//! [`Store`] of the authoritative listing collection.

use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Listing,
    generate,
    infra::transport,
    query::{connectivity, listings},
    Query, Service,
};

/// Authoritative collection of the currently known listings.
///
/// The [`Store`] exclusively owns the collection; everything else borrows
/// it read-only and derives from it.
#[derive(Clone, Debug, Default)]
pub struct Store {
    /// Current collection of this [`Store`].
    listings: Vec<Listing>,

    /// Indicator whether the collection has been loaded at least once.
    loaded: bool,
}

/// Source a [`Store`] collection was last filled from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Source {
    /// Remote listings endpoint.
    Server,

    /// Synthetic fallback data.
    Generated,
}

/// Outcome of a [`Store::load()`] attempt.
#[derive(Clone, Debug)]
pub struct LoadOutcome {
    /// [`Source`] the collection was filled from.
    pub source: Source,

    /// Detail of the failure that forced the generated fallback, if any.
    ///
    /// Carried at most once per failed attempt; the user-visible layer is
    /// expected to surface it exactly once.
    pub detail: Option<String>,
}

impl Store {
    /// Returns the current collection of this [`Store`].
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Indicates whether the collection has been loaded at least once.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Atomically swaps the collection of this [`Store`].
    pub fn replace(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
        self.loaded = true;
    }

    /// Loads the collection from the remote endpoint of the provided
    /// [`Service`].
    ///
    /// The connectivity probe gates the fetch attempt; any failure (the
    /// endpoint unreachable, a non-success response, malformed data) falls
    /// back to generated listings, so the page always ends up with a
    /// loaded collection.
    pub async fn load<T>(&mut self, service: &Service<T>) -> LoadOutcome
    where
        Service<T>: Query<
                connectivity::Probe,
                Ok = bool,
                Err = Traced<transport::Error>,
            > + Query<
                listings::Load,
                Ok = Vec<Listing>,
                Err = Traced<transport::Error>,
            >,
    {
        let detail = if service
            .execute(connectivity::Probe)
            .await
            .unwrap_or(false)
        {
            match service.execute(listings::Load).await {
                Ok(listings) => {
                    log::info!(
                        "loaded {} listing(s) from the server",
                        listings.len(),
                    );
                    self.replace(listings);
                    return LoadOutcome { source: Source::Server, detail: None };
                }
                Err(e) => e.as_ref().detail(),
            }
        } else {
            "remote endpoint is unreachable".to_owned()
        };

        log::warn!("falling back to generated listings: {detail}");
        self.replace(generate::listings(service.config().fallback_listings));
        LoadOutcome { source: Source::Generated, detail: Some(detail) }
    }
}

#[cfg(test)]
mod spec {
    use common::{Fetch, Handler, Ping};
    use futures::executor::block_on;
    use tracerr::Traced;

    use crate::{
        domain::Listing, generate, infra::transport, Config, Service,
    };

    use super::{Source, Store};

    /// [`Transport`] stub behaving like a working remote endpoint.
    ///
    /// [`Transport`]: transport::Transport
    struct Online(usize);

    impl Handler<Ping> for Online {
        type Ok = bool;
        type Err = Traced<transport::Error>;

        async fn execute(&self, _: Ping) -> Result<bool, Self::Err> {
            Ok(true)
        }
    }

    impl Handler<Fetch> for Online {
        type Ok = Vec<Listing>;
        type Err = Traced<transport::Error>;

        async fn execute(&self, _: Fetch) -> Result<Self::Ok, Self::Err> {
            Ok(generate::listings(self.0))
        }
    }

    /// [`Transport`] stub failing every request.
    ///
    /// [`Transport`]: transport::Transport
    struct Unreachable;

    impl Handler<Ping> for Unreachable {
        type Ok = bool;
        type Err = Traced<transport::Error>;

        async fn execute(&self, _: Ping) -> Result<bool, Self::Err> {
            Ok(false)
        }
    }

    impl Handler<Fetch> for Unreachable {
        type Ok = Vec<Listing>;
        type Err = Traced<transport::Error>;

        async fn execute(&self, _: Fetch) -> Result<Self::Ok, Self::Err> {
            panic!("fetch must be gated by the probe")
        }
    }

    #[test]
    fn fills_from_the_server_when_reachable() {
        let service = Service::new(Config::default(), Online(3));
        let mut store = Store::default();

        let outcome = block_on(store.load(&service));

        assert_eq!(outcome.source, Source::Server);
        assert!(outcome.detail.is_none());
        assert!(store.is_loaded());
        assert_eq!(store.listings().len(), 3);
    }

    #[test]
    fn falls_back_to_generated_data_when_unreachable() {
        let service = Service::new(Config::default(), Unreachable);
        let mut store = Store::default();
        assert!(!store.is_loaded());

        let outcome = block_on(store.load(&service));

        assert_eq!(outcome.source, Source::Generated);
        assert_eq!(
            outcome.detail.as_deref(),
            Some("remote endpoint is unreachable"),
        );
        assert!(store.is_loaded());
        assert_eq!(store.listings().len(), 10);
    }

    #[test]
    fn replace_swaps_the_whole_collection() {
        let mut store = Store::default();
        store.replace(generate::listings(2));
        assert_eq!(store.listings().len(), 2);

        store.replace(Vec::new());
        assert!(store.listings().is_empty());
        assert!(store.is_loaded());
    }
}
