//! Answer grading: normalization, similarity scoring and the verdict.

pub mod grader;
pub mod normalize;
pub mod parse;
pub mod similarity;

pub use grader::{GradeOutcome, grade};
pub use normalize::{Language, normalize};
pub use parse::parse_translations;
pub use similarity::similarity;
