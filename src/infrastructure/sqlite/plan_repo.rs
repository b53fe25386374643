use crate::domain::entities::stored_plan::StoredPlan;
use crate::domain::error::DomainError;
use crate::domain::ports::plan_repository::PlanRepository;
use crate::domain::values::currency::Currency;
use crate::domain::values::strategy_variant::StrategyVariant;
use chrono::DateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use std::sync::Mutex;

const SELECT_COLS: &str =
    "plan_id, user_id, strategy, currency, conversion_rate, rate_fallback, budget, strategy_data, created_at";

pub struct SqlitePlanRepo {
    conn: Mutex<Connection>,
}

impl SqlitePlanRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_plan(row: &rusqlite::Row) -> Result<StoredPlan, rusqlite::Error> {
        let strategy_str: String = row.get(2)?;
        let currency_str: String = row.get(3)?;
        let fallback_int: i32 = row.get(5)?;
        let data_str: String = row.get(7)?;
        let created_str: String = row.get(8)?;

        let strategy: StrategyVariant = strategy_str
            .parse()
            .map_err(|e: String| bad_column(2, e))?;
        let currency: Currency = currency_str
            .parse()
            .map_err(|e: String| bad_column(3, e))?;
        let weeks = serde_json::from_str(&data_str).map_err(|e| bad_column(7, e))?;
        let created_at = DateTime::parse_from_rfc3339(&created_str)
            .map_err(|e| bad_column(8, e))?
            .with_timezone(&chrono::Utc);

        Ok(StoredPlan {
            id: row.get(0)?,
            user_id: row.get(1)?,
            strategy,
            currency,
            conversion_rate: row.get(4)?,
            rate_fallback: fallback_int != 0,
            budget: row.get(6)?,
            weeks,
            created_at,
        })
    }
}

fn bad_column<E>(idx: usize, e: E) -> rusqlite::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into())
}

impl PlanRepository for SqlitePlanRepo {
    fn upsert(&self, plan: &StoredPlan) -> Result<(), DomainError> {
        let data = serde_json::to_string(&plan.weeks)?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO facebook_campaign_data (plan_id, user_id, strategy, currency, conversion_rate, rate_fallback, budget, strategy_data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(user_id) DO UPDATE SET
                plan_id = excluded.plan_id,
                strategy = excluded.strategy,
                currency = excluded.currency,
                conversion_rate = excluded.conversion_rate,
                rate_fallback = excluded.rate_fallback,
                budget = excluded.budget,
                strategy_data = excluded.strategy_data,
                created_at = excluded.created_at",
            params![
                plan.id,
                plan.user_id,
                plan.strategy.to_string(),
                plan.currency.code(),
                plan.conversion_rate,
                plan.rate_fallback as i32,
                plan.budget,
                data,
                plan.created_at.to_rfc3339(),
            ],
        ).map_err(|e| DomainError::Database(format!("Failed to store plan: {e}")))?;
        tracing::debug!(user_id = %plan.user_id, plan_id = %plan.id, "stored plan");
        Ok(())
    }

    fn get(&self, user_id: &str) -> Result<Option<StoredPlan>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLS} FROM facebook_campaign_data WHERE user_id = ?1"
            ))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![user_id], Self::row_to_plan)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Database(format!("Failed to read plan: {e}")))
    }

    fn list(&self, limit: Option<usize>) -> Result<Vec<StoredPlan>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM facebook_campaign_data ORDER BY created_at DESC");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
        if let Some(limit) = limit {
            sql.push_str(" LIMIT ?1");
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let plans = stmt
            .query_map(params_refs.as_slice(), Self::row_to_plan)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| match r {
                Ok(plan) => Some(plan),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable stored plan");
                    None
                }
            })
            .collect();
        Ok(plans)
    }

    fn delete(&self, user_id: &str) -> Result<bool, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute(
                "DELETE FROM facebook_campaign_data WHERE user_id = ?1",
                params![user_id],
            )
            .map_err(|e| DomainError::Database(format!("Failed to delete plan: {e}")))?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::migrations::run_migrations;

    fn repo() -> SqlitePlanRepo {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        SqlitePlanRepo::new(conn)
    }

    fn plan(user: &str) -> StoredPlan {
        StoredPlan::new(
            user.to_string(),
            StrategyVariant::Setup,
            Currency::usd(),
            1.0,
            false,
            500.0,
            vec![],
        )
    }

    #[test]
    fn test_get_missing_user() {
        assert!(repo().get("nobody").unwrap().is_none());
    }

    fn corrupt(repo: &SqlitePlanRepo, user: &str, column: &str, value: &str) {
        repo.conn
            .lock()
            .unwrap()
            .execute(
                &format!("UPDATE facebook_campaign_data SET {column} = ?1 WHERE user_id = ?2"),
                params![value, user],
            )
            .unwrap();
    }

    #[test]
    fn test_corrupt_strategy_data_is_an_error() {
        let repo = repo();
        repo.upsert(&plan("u1")).unwrap();
        corrupt(&repo, "u1", "strategy_data", "not json");
        assert!(matches!(repo.get("u1"), Err(DomainError::Database(_))));
        // list skips it instead of failing
        assert!(repo.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_columns_are_errors_not_defaults() {
        for (column, value) in [
            ("strategy", "blitz"),
            ("currency", "dollars"),
            ("created_at", "yesterday"),
        ] {
            let repo = repo();
            repo.upsert(&plan("u1")).unwrap();
            repo.upsert(&plan("u2")).unwrap();
            corrupt(&repo, "u1", column, value);
            let err = repo.get("u1").unwrap_err();
            assert!(matches!(err, DomainError::Database(_)), "{column}");
            let users: Vec<String> = repo.list(None).unwrap().into_iter().map(|p| p.user_id).collect();
            assert_eq!(users, vec!["u2".to_string()], "{column}");
        }
    }

    #[test]
    fn test_delete_reports_whether_removed() {
        let repo = repo();
        repo.upsert(&plan("u1")).unwrap();
        assert!(repo.delete("u1").unwrap());
        assert!(!repo.delete("u1").unwrap());
    }
}
