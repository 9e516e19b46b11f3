pub mod api_models;
pub mod error_models;
pub mod progress_models;
pub mod row_models;
pub mod word_models;

pub use api_models::{ApiResponse, DueWordsParams, LanguageFilter, WordReviewRequest};
pub use error_models::{ConfigError, ProgressError};
pub use progress_models::{LearningStats, ProgressUpdate, ReviewSchedule, WordProgress, WordRef};
pub use row_models::WordProgressRow;
pub use word_models::NewWord;
