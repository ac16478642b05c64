//! Translation rows attached to words.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};
use std::collections::HashSet;

use crate::clock;
use crate::domain::Translation;
use crate::grading::{Language, normalize};
use crate::store::StoreError;

/// Translations of a word in insertion order, text only.
pub fn get_translations(conn: &Connection, word_id: i64) -> Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT turkish FROM translations WHERE word_id = ?1 ORDER BY id ASC")?;
    let translations = stmt
        .query_map(params![word_id], |row| row.get(0))?
        .collect::<Result<Vec<_>>>()?;
    Ok(translations)
}

/// Full translation rows of a word in insertion order.
pub fn get_translation_rows(conn: &Connection, word_id: i64) -> Result<Vec<Translation>> {
    let mut stmt = conn.prepare(
        "SELECT id, word_id, turkish, created_at FROM translations WHERE word_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt
        .query_map(params![word_id], |row| {
            let created_at: String = row.get(3)?;
            Ok(Translation {
                id: row.get(0)?,
                word_id: row.get(1)?,
                turkish: row.get(2)?,
                created_at: clock::parse_ts(&created_at).unwrap_or_else(clock::now),
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(rows)
}

/// Insert translations for a word, skipping any whose normalized form is
/// already present. Uniqueness is per normalized text, so "Elma" does not
/// join an existing "elma".
pub fn insert_translations(
    conn: &Connection,
    word_id: i64,
    translations: &[String],
    now: DateTime<Utc>,
) -> Result<()> {
    let mut seen: HashSet<String> = get_translations(conn, word_id)?
        .iter()
        .map(|t| normalize(t, Language::Turkish))
        .collect();

    let ts = clock::format_ts(now);
    for translation in translations {
        let translation = translation.trim();
        if translation.is_empty() {
            continue;
        }
        if !seen.insert(normalize(translation, Language::Turkish)) {
            continue;
        }
        conn.execute(
            "INSERT OR IGNORE INTO translations (word_id, turkish, created_at) VALUES (?1, ?2, ?3)",
            params![word_id, translation, ts],
        )?;
    }
    Ok(())
}

/// Replace a word's translation set wholesale.
pub fn replace_translations(
    conn: &Connection,
    word_id: i64,
    translations: &[String],
    now: DateTime<Utc>,
) -> Result<()> {
    conn.execute("DELETE FROM translations WHERE word_id = ?1", params![word_id])?;
    insert_translations(conn, word_id, translations, now)
}

/// Append translations to an existing word. An empty list is a no-op; a
/// missing word is an error.
pub fn add_translations(
    conn: &Connection,
    word_id: i64,
    translations: &[String],
) -> std::result::Result<(), StoreError> {
    if translations.is_empty() {
        return Ok(());
    }

    let exists: bool = conn
        .query_row("SELECT COUNT(*) FROM words WHERE id = ?1", params![word_id], |row| {
            row.get::<_, i64>(0)
        })?
        > 0;
    if !exists {
        return Err(StoreError::NotFound(word_id));
    }

    insert_translations(conn, word_id, translations, clock::now())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::words::create_word;
    use crate::testing::TestEnv;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_translations_keep_insertion_order() {
        let env = TestEnv::new().unwrap();
        let id =
            create_word(&env.conn, "gehen", &strings(&["gitmek", "yürümek"]), None, None)
                .unwrap();

        assert_eq!(get_translations(&env.conn, id).unwrap(), vec!["gitmek", "yürümek"]);
    }

    #[test]
    fn test_insert_skips_normalized_duplicates() {
        let env = TestEnv::new().unwrap();
        let id = create_word(&env.conn, "der Apfel", &strings(&["elma"]), None, None).unwrap();

        // "Elma" normalizes to the already-stored "elma"
        insert_translations(&env.conn, id, &strings(&["Elma", "elma ağacı"]), clock::now())
            .unwrap();

        assert_eq!(get_translations(&env.conn, id).unwrap(), vec!["elma", "elma ağacı"]);
    }

    #[test]
    fn test_insert_skips_blank_entries() {
        let env = TestEnv::new().unwrap();
        let id = create_word(&env.conn, "gehen", &strings(&["gitmek"]), None, None).unwrap();

        insert_translations(&env.conn, id, &strings(&["   ", ""]), clock::now()).unwrap();

        assert_eq!(get_translations(&env.conn, id).unwrap(), vec!["gitmek"]);
    }

    #[test]
    fn test_replace_translations() {
        let env = TestEnv::new().unwrap();
        let id =
            create_word(&env.conn, "gehen", &strings(&["gitmek", "yürümek"]), None, None)
                .unwrap();

        replace_translations(&env.conn, id, &strings(&["ilerlemek"]), clock::now()).unwrap();

        assert_eq!(get_translations(&env.conn, id).unwrap(), vec!["ilerlemek"]);
    }

    #[test]
    fn test_add_translations_to_missing_word() {
        let env = TestEnv::new().unwrap();
        let err = add_translations(&env.conn, 42, &strings(&["elma"])).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[test]
    fn test_add_empty_list_is_noop() {
        let env = TestEnv::new().unwrap();
        add_translations(&env.conn, 42, &[]).unwrap();
    }

    #[test]
    fn test_translation_rows_carry_metadata() {
        let env = TestEnv::new().unwrap();
        let id = create_word(&env.conn, "gehen", &strings(&["gitmek"]), None, None).unwrap();

        let rows = get_translation_rows(&env.conn, id).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].word_id, id);
        assert_eq!(rows[0].turkish, "gitmek");
    }
}
