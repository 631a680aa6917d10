//! [`Query`] probing the remote endpoint.

use common::Ping;
use tracerr::Traced;

use crate::{
    infra::{transport, Transport},
    Service,
};

use super::Query;

/// [`Query`] probing the remote endpoint for reachability.
///
/// Used only to gate the initial collection load attempt.
#[derive(Clone, Copy, Debug)]
pub struct Probe;

impl<T> Query<Probe> for Service<T>
where
    T: Transport<Ping, Ok = bool, Err = Traced<transport::Error>>,
{
    type Ok = bool;
    type Err = Traced<transport::Error>;

    async fn execute(&self, _: Probe) -> Result<Self::Ok, Self::Err> {
        self.transport().execute(Ping).await.map_err(tracerr::wrap!())
    }
}
