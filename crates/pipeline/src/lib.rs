//! Snapshot pipeline: aggregation and single-run orchestration.
//!
//! `builder` is the pure merge step from fetched upstream data to the
//! published [`fpl_core::Snapshot`]; `run` wires the fetch phases, the
//! builder, and the publisher together for one run.

pub mod builder;
pub mod run;

pub use builder::build_snapshot;
pub use run::{run, RunReport};
