use crate::domain::error::DomainError;
use crate::domain::values::answer_messages::AnswerMessages;
use crate::domain::values::currency::Currency;
use chrono::NaiveDate;
use serde::Serialize;

/// Validated planner input. Built only through [`PlanInput::new`];
/// JSON arrives as a `PlanRequest` and is converted with `into_input`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanInput {
    pub request_date: NaiveDate,
    pub total_budget: f64,
    pub answer_messages: AnswerMessages,
    pub currency: Currency,
}

impl PlanInput {
    pub fn new(
        request_date: NaiveDate,
        total_budget: f64,
        answer_messages: AnswerMessages,
    ) -> Result<Self, DomainError> {
        if !total_budget.is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "Budget must be a finite number, got {total_budget}"
            )));
        }
        if total_budget < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "Budget must not be negative, got {total_budget}"
            )));
        }
        Ok(Self {
            request_date,
            total_budget,
            answer_messages,
            currency: Currency::usd(),
        })
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_rejects_negative_budget() {
        let err = PlanInput::new(date(), -10.0, AnswerMessages::Yes).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_non_finite_budget() {
        assert!(PlanInput::new(date(), f64::NAN, AnswerMessages::No).is_err());
        assert!(PlanInput::new(date(), f64::INFINITY, AnswerMessages::No).is_err());
    }

    #[test]
    fn test_defaults_to_usd() {
        let input = PlanInput::new(date(), 0.0, AnswerMessages::No).unwrap();
        assert!(input.currency.is_usd());
        let eur = input.with_currency("EUR".parse().unwrap());
        assert_eq!(eur.currency.code(), "EUR");
    }
}
