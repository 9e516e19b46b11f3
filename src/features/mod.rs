pub mod progress;
pub mod srs;
