//! [`Handler`] abstractions and the operations they execute.

use std::future::Future;

/// Executable handler.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

/// Operation to fetch the published collection from a remote endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Fetch;

/// Operation to submit a value to a remote endpoint for publishing.
#[derive(Clone, Copy, Debug)]
pub struct Submit<T>(pub T);

/// Operation to probe a remote endpoint for reachability.
#[derive(Clone, Copy, Debug)]
pub struct Ping;
