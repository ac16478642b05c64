pub mod review;
pub mod word;

pub use review::{Direction, Feedback, FeedbackKind, PoolKind, StudyMode};
pub use word::{Translation, Word};
