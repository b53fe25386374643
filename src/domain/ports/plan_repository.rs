use crate::domain::entities::stored_plan::StoredPlan;
use crate::domain::error::DomainError;

pub trait PlanRepository: Send + Sync {
    /// Insert the plan, replacing any plan already stored for its user.
    fn upsert(&self, plan: &StoredPlan) -> Result<(), DomainError>;
    fn get(&self, user_id: &str) -> Result<Option<StoredPlan>, DomainError>;
    /// Most recently generated first.
    fn list(&self, limit: Option<usize>) -> Result<Vec<StoredPlan>, DomainError>;
    /// Returns whether a plan was removed.
    fn delete(&self, user_id: &str) -> Result<bool, DomainError>;
}
