//! Leitner box scheduling.

use chrono::{DateTime, Duration, Utc};

use crate::config::{BOX_MAX, BOX_MIN, LEITNER_INTERVALS_DAYS};

pub struct LeitnerResult {
    pub new_box: u8,
    pub interval_days: i64,
    pub next_due: DateTime<Utc>,
}

/// Box transition: a correct answer promotes one box (capped at 5), an
/// incorrect answer demotes all the way back to box 1.
pub fn next_box(current_box: u8, correct: bool) -> u8 {
    if correct {
        current_box.saturating_add(1).min(BOX_MAX)
    } else {
        BOX_MIN
    }
}

/// Review interval for a box; out-of-range boxes fall back to "due now".
pub fn interval_days(box_level: u8) -> i64 {
    if (BOX_MIN..=BOX_MAX).contains(&box_level) {
        LEITNER_INTERVALS_DAYS[(box_level - BOX_MIN) as usize]
    } else {
        0
    }
}

/// Next due date for a box, relative to the given clock reading.
pub fn schedule_next(box_level: u8, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(interval_days(box_level))
}

/// Full transition for one answered review. Total over every
/// (box, correctness) pair; there is no retry or partial state.
pub fn calculate_review(current_box: u8, correct: bool, now: DateTime<Utc>) -> LeitnerResult {
    let new_box = next_box(current_box, correct);
    let interval = interval_days(new_box);
    LeitnerResult {
        new_box,
        interval_days: interval,
        next_due: now + Duration::days(interval),
    }
}
