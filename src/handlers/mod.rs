pub mod progress;
pub mod words;
