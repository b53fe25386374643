//! Command dispatch. Returns what the binary prints on stdout.

use chrono::NaiveDate;

use crate::cli::commands::{Commands, OutputFormat};
use crate::cli::render::{plan_table, strategy_tables};
use crate::domain::entities::plan_request::PlanRequest;
use crate::domain::entities::weekly_allocation::WeeklyAllocation;
use crate::domain::values::strategy_variant::StrategyVariant;
use crate::AdPlan;

fn render<T: serde::Serialize>(
    value: &T,
    weeks: &[WeeklyAllocation],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Table => Ok(plan_table(weeks)),
    }
}

/// Run one command. `today` anchors requests that carry no start date.
pub async fn run_command(
    app: &AdPlan,
    cmd: Commands,
    today: NaiveDate,
) -> Result<String, Box<dyn std::error::Error>> {
    let output = match cmd {
        Commands::Plan { strategy, json, format } => {
            let variant: StrategyVariant = strategy.parse().map_err(|e: String| e)?;
            let input = PlanRequest::from_json(&json)?.into_input(today)?;
            let weeks = app.plan(variant, &input)?;
            render(&weeks, &weeks, format)?
        }
        Commands::Setup { user_id, json, format } => {
            let input = PlanRequest::from_json(&json)?.into_input(today)?;
            let plan = app.setup(&user_id, &input).await?;
            if plan.rate_fallback {
                eprintln!(
                    "Warning: no exchange rate for {}, amounts were treated as USD",
                    plan.currency
                );
            }
            render(&plan, &plan.weeks, format)?
        }
        Commands::Show { user_id, format } => {
            let plan = app.stored_plan(&user_id)?;
            render(&plan, &plan.weeks, format)?
        }
        Commands::List { limit } => app
            .stored_plans(Some(limit))?
            .iter()
            .map(|p| {
                format!(
                    "{}: {} {:.2} {} ({} weeks, {})",
                    p.user_id,
                    p.strategy,
                    p.budget,
                    p.currency,
                    p.weeks.len(),
                    p.created_at.to_rfc3339()
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Commands::Delete { user_id } => {
            app.delete_plan(&user_id)?;
            format!("Deleted plan for {user_id}")
        }
        Commands::Strategies => strategy_tables(),
    };
    Ok(output)
}
