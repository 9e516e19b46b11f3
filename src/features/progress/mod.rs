pub mod error_conversions;
pub mod error_responses;
pub mod service;

pub use service::{ProgressService, Review, ReviewOutcome};
