//! SM-2 scheduling adapted for vocabulary review.
//!
//! The free functions here are pure: every one that needs "now" takes it as an
//! argument. `SrsEngine` binds them to a `Clock` and reads it once per call.

use std::sync::Arc;

use chrono::{DateTime, Days, Utc};

use crate::data::models::{LearningStats, ProgressUpdate, ReviewSchedule, WordProgress};
use crate::features::srs::Clock;

pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
pub const DEFAULT_INTERVAL: i32 = 1;
pub const DEFAULT_DIFFICULTY: i32 = 3;
pub const DEFAULT_REVIEW_LIMIT: usize = 20;
pub const MASTERY_THRESHOLD: i32 = 3;

/// Computes the next interval, ease factor and repetition count.
///
/// `quality` runs from 0 (complete blackout) to 5 (perfect recall); values
/// above 5 are treated as 5.
pub fn calculate_next_review(
    quality: u8,
    current_interval: i32,
    ease_factor: f64,
    repetitions: i32,
    now: DateTime<Utc>,
) -> ReviewSchedule {
    let quality = quality.min(5);
    let ease_factor = next_ease_factor(quality, ease_factor);

    let (next_interval, repetitions) = if quality < 3 {
        // Lapse: start the schedule over
        (1, 0)
    } else {
        let repetitions = repetitions.max(0) + 1;
        let interval = match repetitions {
            1 => 1,
            2 => 6,
            _ => (f64::from(current_interval.max(1)) * ease_factor).round() as i32,
        };
        (interval.max(1), repetitions)
    };

    ReviewSchedule {
        next_interval,
        ease_factor,
        repetitions,
        next_review_date: add_days(now, next_interval),
    }
}

fn next_ease_factor(quality: u8, ease_factor: f64) -> f64 {
    let miss = f64::from(5 - quality);
    (ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR)
}

// Calendar days, not elapsed seconds.
fn add_days(now: DateTime<Utc>, days: i32) -> DateTime<Utc> {
    now.checked_add_days(Days::new(days.max(0) as u64))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Derives a 0-5 quality score from an answer.
///
/// Incorrect answers score 1 when the mistake came quickly and 0 otherwise.
/// Correct answers score 3-5 depending on speed and how hard the word is.
pub fn response_to_quality(correct: bool, response_time: f64, difficulty: i32) -> u8 {
    if !correct {
        return if response_time < 5.0 { 1 } else { 0 };
    }

    let time_bonus = if response_time < 2.0 {
        2
    } else if response_time < 5.0 {
        1
    } else if response_time > 15.0 {
        -1
    } else {
        0
    };

    // Easy words need a fast answer to score high; hard words get credit for a moderate one
    let difficulty_adjustment = if difficulty <= 2 && response_time > 3.0 {
        -1
    } else if difficulty >= 4 && response_time < 8.0 {
        1
    } else {
        0
    };

    (3 + time_bonus + difficulty_adjustment).clamp(3, 5) as u8
}

/// Applies a review with an already known quality score.
///
/// Without a response time the running average is carried over unchanged.
pub fn grade_progress(
    progress: &WordProgress,
    quality: u8,
    correct: bool,
    response_time: Option<f64>,
    now: DateTime<Utc>,
) -> ProgressUpdate {
    let schedule = calculate_next_review(
        quality,
        progress.current_interval,
        progress.ease_factor,
        progress.repetitions,
        now,
    );

    let total_reviews = progress.total_reviews + 1;
    let correct_streak = if correct { progress.correct_streak + 1 } else { 0 };

    let average_response_time = match response_time {
        Some(seconds) => {
            let previous = progress.average_response_time.unwrap_or(seconds);
            Some(
                (previous * f64::from(progress.total_reviews) + seconds)
                    / f64::from(total_reviews),
            )
        }
        None => progress.average_response_time,
    };

    ProgressUpdate {
        current_interval: schedule.next_interval,
        ease_factor: schedule.ease_factor,
        repetitions: schedule.repetitions,
        next_review_date: schedule.next_review_date,
        last_review_date: now,
        correct_streak,
        total_reviews,
        average_response_time,
        updated_at: now,
    }
}

/// Scores an answer against the word's difficulty and applies it.
pub fn update_progress(
    progress: &WordProgress,
    correct: bool,
    response_time: f64,
    now: DateTime<Utc>,
) -> ProgressUpdate {
    let quality = response_to_quality(correct, response_time, progress.difficulty());
    grade_progress(progress, quality, correct, Some(response_time), now)
}

/// Due records, most overdue first, harder words first among equals.
pub fn words_for_review(
    all_progress: &[WordProgress],
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<WordProgress> {
    let mut due: Vec<&WordProgress> = all_progress.iter().filter(|p| p.is_due(now)).collect();

    due.sort_by(|a, b| {
        a.next_review_date
            .cmp(&b.next_review_date)
            .then_with(|| b.difficulty().cmp(&a.difficulty()))
    });

    due.into_iter().take(limit).cloned().collect()
}

/// Aggregates a batch of records.
///
/// Accuracy counts `min(correct_streak, total_reviews)` as the correct answers
/// of each record. A streak undercounts whenever a lapse followed earlier
/// correct answers.
pub fn calculate_stats(all_progress: &[WordProgress], now: DateTime<Utc>) -> LearningStats {
    let total_reviews: i64 = all_progress
        .iter()
        .map(|p| i64::from(p.total_reviews))
        .sum();
    let total_correct: i64 = all_progress
        .iter()
        .map(|p| i64::from(p.correct_streak.min(p.total_reviews).max(0)))
        .sum();

    let accuracy = if total_reviews > 0 {
        (total_correct as f64 / total_reviews as f64 * 100.0).round() as u32
    } else {
        0
    };

    LearningStats {
        total_words: all_progress.len(),
        reviewed_words: all_progress.iter().filter(|p| p.total_reviews > 0).count(),
        mastered_words: all_progress.iter().filter(|p| p.is_mastered()).count(),
        words_for_review: all_progress.iter().filter(|p| p.is_due(now)).count(),
        accuracy,
        total_reviews,
    }
}

/// The scheduler bound to a clock.
#[derive(Clone)]
pub struct SrsEngine {
    clock: Arc<dyn Clock>,
}

impl SrsEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn calculate_next_review(
        &self,
        quality: u8,
        current_interval: i32,
        ease_factor: f64,
        repetitions: i32,
    ) -> ReviewSchedule {
        calculate_next_review(
            quality,
            current_interval,
            ease_factor,
            repetitions,
            self.clock.now(),
        )
    }

    pub fn update_progress(
        &self,
        progress: &WordProgress,
        correct: bool,
        response_time: f64,
    ) -> ProgressUpdate {
        update_progress(progress, correct, response_time, self.clock.now())
    }

    pub fn grade_progress(
        &self,
        progress: &WordProgress,
        quality: u8,
        correct: bool,
        response_time: Option<f64>,
    ) -> ProgressUpdate {
        grade_progress(progress, quality, correct, response_time, self.clock.now())
    }

    pub fn words_for_review(&self, all_progress: &[WordProgress], limit: usize) -> Vec<WordProgress> {
        words_for_review(all_progress, limit, self.clock.now())
    }

    pub fn calculate_stats(&self, all_progress: &[WordProgress]) -> LearningStats {
        calculate_stats(all_progress, self.clock.now())
    }
}
