use crate::domain::entities::stored_plan::StoredPlan;
use crate::domain::error::DomainError;
use crate::domain::ports::plan_repository::PlanRepository;
use std::sync::Arc;

pub struct PlanStoreUseCase {
    repo: Arc<dyn PlanRepository>,
}

impl PlanStoreUseCase {
    pub fn new(repo: Arc<dyn PlanRepository>) -> Self {
        Self { repo }
    }

    pub fn get(&self, user_id: &str) -> Result<StoredPlan, DomainError> {
        self.repo
            .get(user_id)?
            .ok_or_else(|| DomainError::NotFound(format!("No plan stored for user {user_id}")))
    }

    pub fn list(&self, limit: Option<usize>) -> Result<Vec<StoredPlan>, DomainError> {
        self.repo.list(limit)
    }

    pub fn delete(&self, user_id: &str) -> Result<(), DomainError> {
        if !self.repo.delete(user_id)? {
            return Err(DomainError::NotFound(format!("No plan stored for user {user_id}")));
        }
        Ok(())
    }
}
