use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::srs::scheduler::{
    DEFAULT_DIFFICULTY, DEFAULT_EASE_FACTOR, DEFAULT_INTERVAL,
    MASTERY_THRESHOLD,
};

/// Catalog data the scheduler reads for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRef {
    pub difficulty: i32, // 1 (easy) to 5 (hard)
}

/// Review history for one (user, word) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    pub user_id: String,
    pub word_id: String,
    pub current_interval: i32, // Days until the next review
    pub ease_factor: f64,
    pub repetitions: i32, // Consecutive successful recalls since the last lapse
    pub next_review_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<DateTime<Utc>>,
    pub correct_streak: i32,
    pub total_reviews: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_response_time: Option<f64>, // Seconds
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<WordRef>,
}

impl WordProgress {
    /// A record that has never been reviewed and is due immediately.
    pub fn new(user_id: &str, word_id: &str, word: WordRef, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            word_id: word_id.to_string(),
            current_interval: DEFAULT_INTERVAL,
            ease_factor: DEFAULT_EASE_FACTOR,
            repetitions: 0,
            next_review_date: now,
            last_review_date: None,
            correct_streak: 0,
            total_reviews: 0,
            average_response_time: None,
            created_at: now,
            updated_at: now,
            word: Some(word),
        }
    }

    pub fn difficulty(&self) -> i32 {
        self.word.map(|w| w.difficulty).unwrap_or(DEFAULT_DIFFICULTY)
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_date <= now
    }

    pub fn is_mastered(&self) -> bool {
        self.repetitions >= MASTERY_THRESHOLD && self.correct_streak >= MASTERY_THRESHOLD
    }

    /// Merges a scheduler update into this record.
    pub fn apply(&mut self, update: &ProgressUpdate) {
        self.current_interval = update.current_interval;
        self.ease_factor = update.ease_factor;
        self.repetitions = update.repetitions;
        self.next_review_date = update.next_review_date;
        self.last_review_date = Some(update.last_review_date);
        self.correct_streak = update.correct_streak;
        self.total_reviews = update.total_reviews;
        self.average_response_time = update.average_response_time;
        self.updated_at = update.updated_at;
    }
}

/// Output of one SM-2 step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSchedule {
    pub next_interval: i32,
    pub ease_factor: f64,
    pub repetitions: i32,
    pub next_review_date: DateTime<Utc>,
}

/// The fields of a `WordProgress` that a review changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub current_interval: i32,
    pub ease_factor: f64,
    pub repetitions: i32,
    pub next_review_date: DateTime<Utc>,
    pub last_review_date: DateTime<Utc>,
    pub correct_streak: i32,
    pub total_reviews: i32,
    pub average_response_time: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub total_words: usize,
    pub reviewed_words: usize,
    pub mastered_words: usize,
    pub words_for_review: usize,
    pub accuracy: u32, // Percent, approximated from correct streaks
    pub total_reviews: i64,
}
