//! Narrow data-access seam between the review engine and persistence.

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::db;
use crate::domain::Word;

/// Failure taxonomy for word storage operations.
#[derive(Debug)]
pub enum StoreError {
    /// The German term was empty after trimming
    EmptyTerm,
    /// No translations survived parsing
    NoTranslations,
    /// The word does not exist (deleted or never created)
    NotFound(i64),
    /// Database lock poisoned or unavailable
    Lock,
    /// Underlying database failure
    Db(rusqlite::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTerm => write!(f, "German term must not be empty"),
            Self::NoTranslations => write!(f, "at least one translation is required"),
            Self::NotFound(id) => write!(f, "word {} not found", id),
            Self::Lock => write!(f, "database unavailable"),
            Self::Db(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Db(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Db(e)
    }
}

/// What the review session needs from storage.
///
/// Implementations must serialize read-then-write of a single word's
/// review state; operations on different words are independent.
pub trait WordStore {
    /// Words with next_due_at at or before `now`, earliest due first.
    fn fetch_due_words(&self, now: DateTime<Utc>, limit: usize) -> Result<Vec<Word>, StoreError>;

    /// Uniform random sample without replacement.
    fn fetch_random_words(&self, limit: usize) -> Result<Vec<Word>, StoreError>;

    fn fetch_word(&self, id: i64) -> Result<Option<Word>, StoreError>;

    /// Translations of a word in insertion order.
    fn fetch_translations(&self, word_id: i64) -> Result<Vec<String>, StoreError>;

    /// Atomically apply a graded answer to one word: box, counters,
    /// due date, last-seen and updated timestamps.
    fn persist_review_outcome(
        &self,
        word_id: i64,
        new_box: u8,
        next_due: DateTime<Utc>,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}

/// `WordStore` over a live rusqlite connection.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl WordStore for SqliteStore<'_> {
    fn fetch_due_words(&self, now: DateTime<Utc>, limit: usize) -> Result<Vec<Word>, StoreError> {
        Ok(db::get_due_words(self.conn, now, limit)?)
    }

    fn fetch_random_words(&self, limit: usize) -> Result<Vec<Word>, StoreError> {
        Ok(db::get_random_words(self.conn, limit)?)
    }

    fn fetch_word(&self, id: i64) -> Result<Option<Word>, StoreError> {
        Ok(db::get_word_by_id(self.conn, id)?)
    }

    fn fetch_translations(&self, word_id: i64) -> Result<Vec<String>, StoreError> {
        Ok(db::get_translations(self.conn, word_id)?)
    }

    fn persist_review_outcome(
        &self,
        word_id: i64,
        new_box: u8,
        next_due: DateTime<Utc>,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Ok(db::update_after_answer(self.conn, word_id, new_box, next_due, was_correct, now)?)
    }
}
