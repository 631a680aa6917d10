//! [`Query`] collection related to the published [`Listing`]s.

use common::Fetch;
use tracerr::Traced;

use crate::{
    domain::Listing,
    infra::{transport, Transport},
    Service,
};

use super::Query;

/// [`Query`] loading the published [`Listing`] collection from the remote
/// endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Load;

impl<T> Query<Load> for Service<T>
where
    T: Transport<Fetch, Ok = Vec<Listing>, Err = Traced<transport::Error>>,
{
    type Ok = Vec<Listing>;
    type Err = Traced<transport::Error>;

    async fn execute(&self, _: Load) -> Result<Self::Ok, Self::Err> {
        self.transport().execute(Fetch).await.map_err(tracerr::wrap!())
    }
}
