//! Snapshot publishing to a GitHub gist.

pub mod config;
pub mod publisher;

pub use config::GistConfig;
pub use publisher::{GistPublisher, SnapshotStore};
