pub mod leitner;

pub use leitner::{LeitnerResult, calculate_review, interval_days, next_box, schedule_next};
