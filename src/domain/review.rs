use serde::{Deserialize, Serialize};

/// How a session asks its questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyMode {
    GermanToTurkish,
    TurkishToGerman,
    /// Direction is re-randomized on every turn
    Mixed,
}

impl StudyMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "de->tr" => Some(Self::GermanToTurkish),
            "tr->de" => Some(Self::TurkishToGerman),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GermanToTurkish => "de->tr",
            Self::TurkishToGerman => "tr->de",
            Self::Mixed => "mixed",
        }
    }
}

/// Direction of a single turn; mixed mode resolves to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    GermanToTurkish,
    TurkishToGerman,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GermanToTurkish => "de->tr",
            Self::TurkishToGerman => "tr->de",
        }
    }
}

/// Where the session queue is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolKind {
    /// Words due at or before session start, earliest first
    Due,
    /// Uniform sample without replacement
    Random,
}

impl PoolKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "due" => Some(Self::Due),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Random => "random",
        }
    }
}

/// Category of the per-turn feedback, mirroring the ok/warn/bad flash
/// classes a UI shell would render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    Correct,
    Skipped,
    Wrong,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "ok",
            Self::Skipped => "warn",
            Self::Wrong => "bad",
        }
    }
}

/// Transient feedback for the last answered turn, overwritten each turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}
