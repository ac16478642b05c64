//! Word CRUD and review-state queries.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

use crate::clock;
use crate::domain::Word;
use crate::store::StoreError;

use super::translations::{insert_translations, replace_translations};

/// Create a word with its initial translation set.
///
/// Validation failures abort before anything is written; the row and its
/// translations land in one transaction. New words start in box 1 and
/// are due immediately.
pub fn create_word(
    conn: &Connection,
    german: &str,
    translations: &[String],
    example: Option<&str>,
    notes: Option<&str>,
) -> std::result::Result<i64, StoreError> {
    let german = german.trim();
    if german.is_empty() {
        return Err(StoreError::EmptyTerm);
    }
    if translations.is_empty() {
        return Err(StoreError::NoTranslations);
    }

    let word = Word::new(
        german.to_string(),
        example.map(str::to_string),
        notes.map(str::to_string),
    );

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        r#"
    INSERT INTO words (german, example, notes, box, created_at, updated_at, next_due_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    "#,
        params![
            word.german,
            word.example,
            word.notes,
            word.box_level,
            clock::format_ts(word.created_at),
            clock::format_ts(word.updated_at),
            clock::format_ts(word.next_due_at),
        ],
    )?;
    let word_id = tx.last_insert_rowid();

    insert_translations(&tx, word_id, translations, word.created_at)?;
    tx.commit()?;
    Ok(word_id)
}

/// Update term, example and notes, replacing the translation set wholesale.
pub fn update_word(
    conn: &Connection,
    word_id: i64,
    german: &str,
    translations: &[String],
    example: Option<&str>,
    notes: Option<&str>,
) -> std::result::Result<(), StoreError> {
    let german = german.trim();
    if german.is_empty() {
        return Err(StoreError::EmptyTerm);
    }
    if translations.is_empty() {
        return Err(StoreError::NoTranslations);
    }

    let now = clock::now();
    let tx = conn.unchecked_transaction()?;
    let updated = tx.execute(
        r#"
    UPDATE words
    SET german = ?1, example = ?2, notes = ?3, updated_at = ?4
    WHERE id = ?5
    "#,
        params![german, example, notes, clock::format_ts(now), word_id],
    )?;
    if updated == 0 {
        return Err(StoreError::NotFound(word_id));
    }

    replace_translations(&tx, word_id, translations, now)?;
    tx.commit()?;
    Ok(())
}

/// Delete a word; its translations go with it (FK cascade).
pub fn delete_word(conn: &Connection, word_id: i64) -> Result<()> {
    conn.execute("DELETE FROM words WHERE id = ?1", params![word_id])?;
    Ok(())
}

pub fn get_word_by_id(conn: &Connection, id: i64) -> Result<Option<Word>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, german, example, notes, box, correct_count, wrong_count,
           created_at, updated_at, last_seen_at, next_due_at
    FROM words WHERE id = ?1
    "#,
    )?;

    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_word(row)?))
    } else {
        Ok(None)
    }
}

/// Words due at or before `now`, earliest due first.
pub fn get_due_words(conn: &Connection, now: DateTime<Utc>, limit: usize) -> Result<Vec<Word>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, german, example, notes, box, correct_count, wrong_count,
           created_at, updated_at, last_seen_at, next_due_at
    FROM words
    WHERE next_due_at <= ?1
    ORDER BY next_due_at ASC
    LIMIT ?2
    "#,
    )?;

    let words = stmt
        .query_map(params![clock::format_ts(now), limit as i64], |row| row_to_word(row))?
        .collect::<Result<Vec<_>>>()?;
    Ok(words)
}

/// Uniform random sample of words, without replacement.
pub fn get_random_words(conn: &Connection, limit: usize) -> Result<Vec<Word>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, german, example, notes, box, correct_count, wrong_count,
           created_at, updated_at, last_seen_at, next_due_at
    FROM words
    ORDER BY RANDOM()
    LIMIT ?1
    "#,
    )?;

    let words = stmt
        .query_map(params![limit as i64], |row| row_to_word(row))?
        .collect::<Result<Vec<_>>>()?;
    Ok(words)
}

/// Sortable columns for word listings. Column names come from this
/// whitelist only; user-supplied keys never reach the SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSort {
    UpdatedAt,
    Id,
    German,
    BoxLevel,
    NextDueAt,
}

impl WordSort {
    /// Unknown keys fall back to the update timestamp.
    pub fn from_key(key: &str) -> Self {
        match key {
            "id" => Self::Id,
            "german" => Self::German,
            "box" => Self::BoxLevel,
            "due" => Self::NextDueAt,
            _ => Self::UpdatedAt,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::UpdatedAt => "updated_at",
            Self::Id => "id",
            Self::German => "german",
            Self::BoxLevel => "box",
            Self::NextDueAt => "next_due_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Anything but "asc" sorts descending.
    pub fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("asc") { Self::Asc } else { Self::Desc }
    }

    fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Words with their translations attached, ordered by the chosen column.
pub fn list_words(
    conn: &Connection,
    limit: usize,
    sort: WordSort,
    direction: SortDirection,
) -> Result<Vec<(Word, Vec<String>)>> {
    let mut stmt = conn.prepare(&format!(
        r#"
    SELECT id, german, example, notes, box, correct_count, wrong_count,
           created_at, updated_at, last_seen_at, next_due_at
    FROM words
    ORDER BY {} COLLATE NOCASE {}
    LIMIT ?1
    "#,
        sort.column(),
        direction.as_sql(),
    ))?;

    let words = stmt
        .query_map(params![limit as i64], |row| row_to_word(row))?
        .collect::<Result<Vec<_>>>()?;

    let mut listed = Vec::with_capacity(words.len());
    for word in words {
        let translations = super::translations::get_translations(conn, word.id)?;
        listed.push((word, translations));
    }
    Ok(listed)
}

/// Apply a graded answer to one word: box, the matching counter, due
/// date, last-seen and updated timestamps, in a single statement.
pub fn update_after_answer(
    conn: &Connection,
    word_id: i64,
    new_box: u8,
    next_due: DateTime<Utc>,
    was_correct: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    conn.execute(
        r#"
    UPDATE words
    SET box = ?1,
        correct_count = correct_count + ?2,
        wrong_count = wrong_count + ?3,
        updated_at = ?4, last_seen_at = ?4, next_due_at = ?5
    WHERE id = ?6
    "#,
        params![
            new_box,
            if was_correct { 1 } else { 0 },
            if was_correct { 0 } else { 1 },
            clock::format_ts(now),
            clock::format_ts(next_due),
            word_id,
        ],
    )?;
    Ok(())
}

/// Convert a database row to a Word struct
pub(crate) fn row_to_word(row: &rusqlite::Row) -> Result<Word> {
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;
    let last_seen_at: Option<String> = row.get(9)?;
    let next_due_at: String = row.get(10)?;

    Ok(Word {
        id: row.get(0)?,
        german: row.get(1)?,
        example: row.get(2)?,
        notes: row.get(3)?,
        box_level: row.get(4)?,
        correct_count: row.get(5)?,
        wrong_count: row.get(6)?,
        created_at: clock::parse_ts(&created_at).unwrap_or_else(clock::now),
        updated_at: clock::parse_ts(&updated_at).unwrap_or_else(clock::now),
        last_seen_at: last_seen_at.as_deref().and_then(clock::parse_ts),
        next_due_at: clock::parse_ts(&next_due_at).unwrap_or_else(clock::now),
    })
}
