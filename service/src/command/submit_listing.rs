//! [`Command`] publishing a new listing [`Submission`].

use common::Submit;
use tracerr::Traced;

use crate::{
    domain::Submission,
    infra::{transport, Transport},
    Service,
};

use super::Command;

/// [`Command`] publishing the provided [`Submission`] on the remote
/// endpoint.
///
/// Validation has already happened by construction: a [`Submission`] only
/// exists for a form that passed the aggregate validator.
#[derive(Clone, Debug)]
pub struct SubmitListing(pub Submission);

impl<T> Command<SubmitListing> for Service<T>
where
    T: Transport<Submit<Submission>, Ok = (), Err = Traced<transport::Error>>,
{
    type Ok = ();
    type Err = Traced<transport::Error>;

    async fn execute(
        &self,
        SubmitListing(submission): SubmitListing,
    ) -> Result<Self::Ok, Self::Err> {
        self.transport()
            .execute(Submit(submission))
            .await
            .map_err(tracerr::wrap!())
    }
}
