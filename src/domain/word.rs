use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::config;

/// A drillable vocabulary entry: one German term with its review state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub german: String,
    pub example: Option<String>,
    pub notes: Option<String>,
    /// Leitner box, always within 1-5
    pub box_level: u8,
    pub correct_count: i64,
    pub wrong_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_seen_at: Option<DateTime<Utc>>,
    /// Always set; box 1 words are due the moment they are created
    pub next_due_at: DateTime<Utc>,
}

impl Word {
    pub fn new(german: String, example: Option<String>, notes: Option<String>) -> Self {
        let now = clock::now();
        Self {
            id: 0,
            german,
            example,
            notes,
            box_level: config::BOX_MIN,
            correct_count: 0,
            wrong_count: 0,
            created_at: now,
            updated_at: now,
            last_seen_at: None,
            next_due_at: now,
        }
    }
}

/// One accepted Turkish rendering of a word's term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub id: i64,
    pub word_id: i64,
    pub turkish: String,
    pub created_at: DateTime<Utc>,
}
