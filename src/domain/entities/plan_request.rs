//! The plan request as stored by the campaign wizard.
//!
//! `budget` arrives as either a JSON number or a numeric string, and
//! `answerMessages` as the literal strings `"yes"` / `"no"`. Both are
//! validated here so the planner only ever sees a typed [`PlanInput`].

use crate::domain::entities::plan_input::PlanInput;
use crate::domain::error::DomainError;
use crate::domain::values::answer_messages::AnswerMessages;
use crate::domain::values::currency::Currency;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BudgetValue {
    Number(f64),
    Text(String),
}

impl BudgetValue {
    pub fn as_f64(&self) -> Result<f64, DomainError> {
        match self {
            BudgetValue::Number(n) => Ok(*n),
            BudgetValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| DomainError::InvalidInput(format!("Budget is not a number: {s:?}"))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    pub budget: BudgetValue,
    pub answer_messages: String,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PlanRequest {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate into a [`PlanInput`]. `today` is used when the request
    /// carries no start date.
    pub fn into_input(self, today: NaiveDate) -> Result<PlanInput, DomainError> {
        let request_date = match self.start_date.as_deref() {
            None | Some("") => today,
            Some(s) => parse_start_date(s)?,
        };
        let answer: AnswerMessages = self
            .answer_messages
            .parse()
            .map_err(DomainError::InvalidInput)?;
        let mut input = PlanInput::new(request_date, self.budget.as_f64()?, answer)?;
        if let Some(code) = self.currency.as_deref().filter(|c| !c.trim().is_empty()) {
            let currency: Currency = code.parse().map_err(DomainError::InvalidInput)?;
            input = input.with_currency(currency);
        }
        Ok(input)
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part is used).
pub fn parse_start_date(s: &str) -> Result<NaiveDate, DomainError> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(DomainError::Parse(format!(
        "Invalid start date: {s}. Use YYYY-MM-DD or RFC3339"
    )))
}
