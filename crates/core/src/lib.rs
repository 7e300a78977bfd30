#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod tracker;

pub use error::Error;
pub use tracker::{StepProgress, StepTracker, ToggleOutcome};
