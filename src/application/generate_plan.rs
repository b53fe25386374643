use crate::domain::entities::plan_input::PlanInput;
use crate::domain::entities::weekly_allocation::WeeklyAllocation;
use crate::domain::error::DomainError;
use crate::domain::values::budget_plan::compute_weekly_plan;
use crate::domain::values::strategy_variant::StrategyVariant;

/// Computes a plan in the input's own currency with no conversion.
pub struct GeneratePlanUseCase;

impl GeneratePlanUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        strategy: StrategyVariant,
        input: &PlanInput,
    ) -> Result<Vec<WeeklyAllocation>, DomainError> {
        let weeks = compute_weekly_plan(input, &strategy.config(), 1.0)?;
        tracing::debug!(%strategy, weeks = weeks.len(), budget = input.total_budget, "generated plan");
        Ok(weeks)
    }
}

impl Default for GeneratePlanUseCase {
    fn default() -> Self {
        Self::new()
    }
}
