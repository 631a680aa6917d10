//! Service contains the business logic of the application.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod filter;
pub mod form;
pub mod generate;
pub mod infra;
pub mod query;
pub mod store;
pub mod upload;

use smart_default::SmartDefault;

pub use self::{command::Command, query::Query, store::Store};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of synthetic listings generated when the remote source is
    /// unavailable.
    #[default(10)]
    pub fallback_listings: usize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<T> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Transport`] of this [`Service`].
    ///
    /// [`Transport`]: infra::Transport
    transport: T,
}

impl<T> Service<T> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Transport`] of this [`Service`].
    ///
    /// [`Transport`]: infra::Transport
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
