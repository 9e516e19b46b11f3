//! Property-based tests for the SM-2 scheduler
//!
//! Invariants:
//! - Ease factor never drops below 1.3
//! - A lapse (quality < 3) resets repetitions and interval together
//! - Intervals are always at least one day
//! - Correct answers score 3-5, incorrect answers 0-1

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use lingolab::data::models::{WordProgress, WordRef};
use lingolab::features::srs::scheduler::{
    MIN_EASE_FACTOR, calculate_next_review, calculate_stats, response_to_quality,
    update_progress, words_for_review,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

fn arb_progress() -> impl Strategy<Value = WordProgress> {
    (
        1i32..=365,           // current_interval
        1.3f64..=4.0,         // ease_factor
        0i32..=20,            // repetitions
        0i32..=50,            // correct_streak
        0i32..=200,           // total_reviews
        -30i64..=30,          // days until due
        1i32..=5,             // difficulty
        proptest::option::of(0.0f64..=60.0),
    )
        .prop_map(
            |(interval, ease, repetitions, streak, total, due_in, difficulty, avg)| {
                let mut progress =
                    WordProgress::new("user-1", "word", WordRef { difficulty }, now());
                progress.current_interval = interval;
                progress.ease_factor = ease;
                progress.repetitions = repetitions;
                progress.correct_streak = streak;
                progress.total_reviews = total;
                progress.next_review_date = now() + Duration::days(due_in);
                progress.average_response_time = avg;
                progress
            },
        )
}

proptest! {
    #[test]
    fn prop_ease_factor_floor(
        quality in 0u8..=5,
        interval in 1i32..=365,
        ease in 1.3f64..=4.0,
        repetitions in 0i32..=20,
    ) {
        let result = calculate_next_review(quality, interval, ease, repetitions, now());
        prop_assert!(result.ease_factor >= MIN_EASE_FACTOR);
        prop_assert!(result.next_interval >= 1);
        prop_assert_eq!(result.next_review_date, now() + Duration::days(i64::from(result.next_interval)));
    }

    #[test]
    fn prop_lapse_resets(
        quality in 0u8..3,
        interval in 1i32..=365,
        ease in 1.3f64..=4.0,
        repetitions in 0i32..=20,
    ) {
        let result = calculate_next_review(quality, interval, ease, repetitions, now());
        prop_assert_eq!(result.repetitions, 0);
        prop_assert_eq!(result.next_interval, 1);
    }

    #[test]
    fn prop_success_advances_repetitions(
        quality in 3u8..=5,
        interval in 1i32..=365,
        ease in 1.3f64..=4.0,
        repetitions in 2i32..=20,
    ) {
        let result = calculate_next_review(quality, interval, ease, repetitions, now());
        prop_assert_eq!(result.repetitions, repetitions + 1);
        prop_assert!(result.next_interval >= interval);
    }

    #[test]
    fn prop_quality_clamp(response_time in 0.0f64..=120.0, difficulty in 1i32..=5) {
        let correct = response_to_quality(true, response_time, difficulty);
        let incorrect = response_to_quality(false, response_time, difficulty);
        prop_assert!((3..=5).contains(&correct));
        prop_assert!(incorrect <= 1);
    }

    #[test]
    fn prop_update_bookkeeping(
        progress in arb_progress(),
        correct in any::<bool>(),
        response_time in 0.0f64..=60.0,
    ) {
        let update = update_progress(&progress, correct, response_time, now());
        prop_assert_eq!(update.total_reviews, progress.total_reviews + 1);
        prop_assert_eq!(update.correct_streak, if correct { progress.correct_streak + 1 } else { 0 });
        prop_assert!(update.ease_factor >= MIN_EASE_FACTOR);
        prop_assert!(update.current_interval >= 1);
        prop_assert_eq!(update.last_review_date, now());
        prop_assert!(update.average_response_time.unwrap() >= 0.0);
    }

    #[test]
    fn prop_due_words_sorted_and_bounded(
        all in proptest::collection::vec(arb_progress(), 0..40),
        limit in 0usize..30,
    ) {
        let due = words_for_review(&all, limit, now());
        let expected = all.iter().filter(|p| p.next_review_date <= now()).count();

        prop_assert_eq!(due.len(), expected.min(limit));
        prop_assert!(due.iter().all(|p| p.next_review_date <= now()));
        for pair in due.windows(2) {
            prop_assert!(
                pair[0].next_review_date < pair[1].next_review_date
                    || (pair[0].next_review_date == pair[1].next_review_date
                        && pair[0].difficulty() >= pair[1].difficulty())
            );
        }
    }

    #[test]
    fn prop_stats_bounds(all in proptest::collection::vec(arb_progress(), 0..40)) {
        let stats = calculate_stats(&all, now());
        prop_assert_eq!(stats.total_words, all.len());
        prop_assert!(stats.reviewed_words <= stats.total_words);
        prop_assert!(stats.mastered_words <= stats.total_words);
        prop_assert!(stats.accuracy <= 100);
    }
}
