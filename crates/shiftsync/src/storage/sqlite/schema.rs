//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- One document per month, keyed by storage id (e.g. dec_2025)
CREATE TABLE IF NOT EXISTS schedules (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const SELECT_SCHEDULE: &str = r#"
SELECT data
FROM schedules
WHERE id = ?1
"#;

pub const SELECT_UPDATED_AT: &str = r#"
SELECT updated_at
FROM schedules
WHERE id = ?1
"#;

/// Full replace, creating the row on first save.
pub const UPSERT_SCHEDULE: &str = r#"
INSERT INTO schedules (id, data, updated_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at
"#;
