//! Shared fixtures for the crate's tests.

use rusqlite::{Connection, Result};
use tempfile::TempDir;

use crate::db::run_migrations;

/// A migrated on-disk database in a directory that is removed on drop.
pub struct TestEnv {
    #[allow(dead_code)]
    temp: TempDir,
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().expect("create temp dir");
        let conn = Connection::open(temp.path().join("test.db"))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        run_migrations(&conn)?;
        Ok(Self { temp, conn })
    }
}
