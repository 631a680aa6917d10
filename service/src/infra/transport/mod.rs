//! [`Transport`]-related implementations.

pub mod http;

use derive_more::{Display, Error as StdError, From};

pub use self::http::Http;

/// Remote endpoint operation.
pub use common::Handler as Transport;

/// [`Transport`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request failed to reach the remote endpoint, or its body couldn't
    /// be read.
    #[display("request failed: {_0}")]
    #[from]
    Request(reqwest::Error),

    /// Remote endpoint responded with a non-success status.
    #[display("{status}: {detail}")]
    Status {
        /// Status code of the response.
        status: reqwest::StatusCode,

        /// Body text of the response, if any.
        detail: String,
    },
}

impl Error {
    /// Returns the user-facing detail of this [`Error`].
    ///
    /// For a status failure this is the body text the endpoint responded
    /// with, falling back to the status line when the body is empty.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Request(e) => e.to_string(),
            Self::Status { status, detail } => {
                if detail.trim().is_empty() {
                    status.to_string()
                } else {
                    detail.clone()
                }
            }
        }
    }
}
