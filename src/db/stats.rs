//! Aggregate statistics over the word collection.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

use crate::clock;
use crate::config::{BOX_MAX, BOX_MIN};

/// Collection-wide progress snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStats {
    pub total_words: i64,
    pub due_now: i64,
    /// Word count per box, index 0 holding box 1
    pub per_box: [i64; 5],
    pub total_correct: i64,
    pub total_wrong: i64,
}

pub fn get_stats(conn: &Connection, now: DateTime<Utc>) -> Result<WordStats> {
    let (total_words, total_correct, total_wrong) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(correct_count), 0), COALESCE(SUM(wrong_count), 0) FROM words",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let due_now = conn.query_row(
        "SELECT COUNT(*) FROM words WHERE next_due_at <= ?1",
        params![clock::format_ts(now)],
        |row| row.get(0),
    )?;

    let mut per_box = [0i64; 5];
    let mut stmt = conn.prepare("SELECT box, COUNT(*) FROM words GROUP BY box")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    for row in rows {
        let (box_level, count) = row?;
        if (BOX_MIN as i64..=BOX_MAX as i64).contains(&box_level) {
            per_box[(box_level - BOX_MIN as i64) as usize] = count;
        }
    }

    Ok(WordStats { total_words, due_now, per_box, total_correct, total_wrong })
}
