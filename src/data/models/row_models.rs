use chrono::NaiveDateTime;
use diesel::{AsChangeset, Insertable, Queryable, Selectable};

use crate::data::models::{WordProgress, WordRef};
use crate::schema::word_progress;

/// `word_progress` row as stored in SQLite (naive UTC timestamps).
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = word_progress)]
#[diesel(primary_key(user_id, word_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WordProgressRow {
    pub user_id: String,
    pub word_id: String,
    pub current_interval: i32,
    pub ease_factor: f64,
    pub repetitions: i32,
    pub next_review_date: NaiveDateTime,
    pub last_review_date: Option<NaiveDateTime>,
    pub correct_streak: i32,
    pub total_reviews: i32,
    pub average_response_time: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl WordProgressRow {
    pub fn into_progress(self, difficulty: i32) -> WordProgress {
        WordProgress {
            user_id: self.user_id,
            word_id: self.word_id,
            current_interval: self.current_interval,
            ease_factor: self.ease_factor,
            repetitions: self.repetitions,
            next_review_date: self.next_review_date.and_utc(),
            last_review_date: self.last_review_date.map(|d| d.and_utc()),
            correct_streak: self.correct_streak,
            total_reviews: self.total_reviews,
            average_response_time: self.average_response_time,
            created_at: self.created_at.and_utc(),
            updated_at: self.updated_at.and_utc(),
            word: Some(WordRef { difficulty }),
        }
    }
}

impl From<&WordProgress> for WordProgressRow {
    fn from(progress: &WordProgress) -> Self {
        Self {
            user_id: progress.user_id.clone(),
            word_id: progress.word_id.clone(),
            current_interval: progress.current_interval,
            ease_factor: progress.ease_factor,
            repetitions: progress.repetitions,
            next_review_date: progress.next_review_date.naive_utc(),
            last_review_date: progress.last_review_date.map(|d| d.naive_utc()),
            correct_streak: progress.correct_streak,
            total_reviews: progress.total_reviews,
            average_response_time: progress.average_response_time,
            created_at: progress.created_at.naive_utc(),
            updated_at: progress.updated_at.naive_utc(),
        }
    }
}
