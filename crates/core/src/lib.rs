//! Shared types and errors for the fplsnap snapshot publisher.

pub mod error;
pub mod snapshot;

pub use error::{Error, Result};
pub use snapshot::*;
