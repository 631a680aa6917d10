//! Infrastructure layer.

pub mod transport;

pub use self::transport::{Http, Transport};
