use std::sync::Arc;

use serde::Serialize;

use crate::data::models::{
    LearningStats, NewWord, ProgressError, WordProgress, WordReviewRequest,
};
use crate::data::repositories::{ProgressRepository, WordCatalog};
use crate::features::srs::SrsEngine;
use crate::features::srs::scheduler;

/// One answer to apply to a word's progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Review {
    /// Quality is derived from correctness, speed and word difficulty.
    Answer { correct: bool, response_time: f64 },
    /// Quality was rated by the caller; 3 and above counts as correct.
    Graded { quality: u8, response_time: Option<f64> },
}

impl TryFrom<&WordReviewRequest> for Review {
    type Error = ProgressError;

    fn try_from(request: &WordReviewRequest) -> Result<Self, Self::Error> {
        match (request.quality, request.correct, request.response_time) {
            (Some(quality), _, response_time) => Ok(Review::Graded {
                quality,
                response_time,
            }),
            (None, Some(correct), Some(response_time)) => Ok(Review::Answer {
                correct,
                response_time,
            }),
            (None, Some(_), None) => Err(ProgressError::InvalidReview(
                "responseTime is required when quality is not given".into(),
            )),
            (None, None, _) => Err(ProgressError::InvalidReview(
                "either correct or quality is required".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub quality: u8,
    pub progress: WordProgress,
}

/// Loads progress, runs the scheduler over it and stores the result.
#[derive(Clone)]
pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
    words: Arc<dyn WordCatalog>,
    engine: SrsEngine,
}

impl ProgressService {
    pub fn new(
        progress: Arc<dyn ProgressRepository>,
        words: Arc<dyn WordCatalog>,
        engine: SrsEngine,
    ) -> Self {
        Self {
            progress,
            words,
            engine,
        }
    }

    /// Records a review, creating the progress record on the first one.
    pub fn record_review(
        &self,
        user_id: &str,
        word_id: &str,
        review: Review,
    ) -> Result<ReviewOutcome, ProgressError> {
        let now = self.engine.now();

        let mut progress = match self.progress.load(user_id, word_id)? {
            Some(progress) => progress,
            None => {
                let word = self
                    .words
                    .find_word(word_id)?
                    .ok_or_else(|| ProgressError::WordNotFound(word_id.to_string()))?;
                log::info!("Starting progress for user {} on word {}", user_id, word_id);
                WordProgress::new(user_id, word_id, word, now)
            }
        };

        let (quality, update) = match review {
            Review::Answer {
                correct,
                response_time,
            } => (
                scheduler::response_to_quality(correct, response_time, progress.difficulty()),
                scheduler::update_progress(&progress, correct, response_time, now),
            ),
            Review::Graded {
                quality,
                response_time,
            } => {
                let quality = quality.min(5);
                (
                    quality,
                    scheduler::grade_progress(&progress, quality, quality >= 3, response_time, now),
                )
            }
        };

        progress.apply(&update);
        self.progress.save(&progress)?;

        log::debug!(
            "Review recorded: user={} word={} quality={} interval={} ease={:.2}",
            user_id,
            word_id,
            quality,
            progress.current_interval,
            progress.ease_factor
        );

        Ok(ReviewOutcome { quality, progress })
    }

    pub fn word_progress(&self, user_id: &str, word_id: &str) -> Result<WordProgress, ProgressError> {
        self.progress
            .load(user_id, word_id)?
            .ok_or_else(|| ProgressError::ProgressNotFound(word_id.to_string()))
    }

    pub fn due_words(
        &self,
        user_id: &str,
        language_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<WordProgress>, ProgressError> {
        let all = self.progress.list_for_user(user_id, language_id)?;
        Ok(self.engine.words_for_review(&all, limit))
    }

    pub fn learning_stats(
        &self,
        user_id: &str,
        language_id: Option<&str>,
    ) -> Result<LearningStats, ProgressError> {
        let all = self.progress.list_for_user(user_id, language_id)?;
        Ok(self.engine.calculate_stats(&all))
    }

    pub fn add_word(&self, word: &NewWord) -> Result<(), ProgressError> {
        self.words.upsert_word(word)
    }
}
