use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS facebook_campaign_data (
            user_id TEXT PRIMARY KEY,
            plan_id TEXT NOT NULL,
            strategy TEXT NOT NULL,
            currency TEXT NOT NULL DEFAULT 'USD',
            conversion_rate REAL NOT NULL DEFAULT 1.0,
            rate_fallback INTEGER NOT NULL DEFAULT 0,
            budget REAL NOT NULL,
            strategy_data TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_campaign_created ON facebook_campaign_data(created_at);
        "
    ).map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
