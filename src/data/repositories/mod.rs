pub mod progress;

pub use progress::{ProgressRepository, SqliteRepository, WordCatalog};
