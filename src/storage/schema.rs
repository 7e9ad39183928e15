//! SQLite schema for the durable key-value backend.

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Schema version bookkeeping table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Version 1: one row per storage key holding a serialized collection.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
