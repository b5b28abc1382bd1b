//! Batch fetching: paced, sequential, with graceful degradation.
//!
//! - [`pacing`]: generic "one at a time with spacing" iteration
//! - [`tier`]: pure three-tier resolution of one symbol's outcomes
//! - [`synthetic`]: placeholder records for symbols with no live quote
//! - [`orchestrator`]: the [`BatchFetcher`] tying them to the providers

pub mod orchestrator;
pub mod pacing;
pub mod synthetic;
pub mod tier;

pub use orchestrator::{BatchFetcher, BatchSummary};
pub use pacing::Pacing;
