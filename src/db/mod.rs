pub mod schema;
pub mod stats;
pub mod translations;
pub mod words;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::grading::parse_translations;
use crate::store::StoreError;

pub use schema::run_migrations;
pub use stats::*;
pub use translations::*;
pub use words::*;

pub type DbPool = Arc<Mutex<Connection>>;

/// Try to acquire the database lock, reporting poisoning instead of
/// panicking in the caller.
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, StoreError> {
    pool.lock().map_err(|_: PoisonError<_>| {
        tracing::error!("database mutex poisoned - a thread panicked while holding the lock");
        StoreError::Lock
    })
}

pub fn init_db(path: &Path) -> Result<DbPool> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Seed a handful of starter words; no-op once any word exists.
pub fn seed_demo_words(conn: &Connection) -> std::result::Result<(), StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let demo = [
        ("der Apfel", "elma", Some("Ich esse einen Apfel."), Some("isim")),
        ("gehen", "gitmek, yürümek", Some("Wir gehen nach Hause."), Some("fiil")),
        ("schön", "güzel, hoş", Some("Das ist ein schönes Bild."), Some("sıfat")),
        ("bekommen", "almak, elde etmek", Some("Ich bekomme ein Geschenk."), Some("fiil")),
    ];

    for (german, turkish, example, notes) in demo {
        let translations = parse_translations(turkish);
        create_word(conn, german, &translations, example, notes)?;
    }

    tracing::info!("Seeded {} demo words", demo.len());
    Ok(())
}
