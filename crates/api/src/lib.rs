//! Upstream FPL API client.
//!
//! `client` holds the single-request fetcher with its retry policy, `batch`
//! the grouped concurrent fan-out used for the per-member endpoints, and
//! `models` the loosely-typed upstream payload shapes.

pub mod batch;
pub mod client;
pub mod config;
pub mod models;

pub use batch::{fetch_batched, BatchConfig};
pub use client::{FplApi, FplClient};
pub use config::FplConfig;
pub use models::*;
