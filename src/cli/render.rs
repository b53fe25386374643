//! Plain-text rendering of plans for the terminal.

use crate::domain::entities::weekly_allocation::WeeklyAllocation;
use crate::domain::values::budget_plan::PlanSummary;
use crate::domain::values::strategy_variant::StrategyVariant;

pub fn plan_table(weeks: &[WeeklyAllocation]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>5} {:<9} {:<10} {:>6} {:>12} {:>4} {:>10} {:>4} {:>4} {:>9}\n",
        "week", "level", "iso", "start", "share", "amount", "ads", "daily/ad", "msg", "link", "change"
    ));
    for w in weeks {
        out.push_str(&format!(
            "{:>4} {:>5} {:<9} {:<10} {:>5.0}% {:>12.2} {:>4} {:>10.2} {:>4} {:>4} {:>8.1}%\n",
            w.week_index,
            w.level,
            w.calendar_week_label,
            w.start_date.format("%Y-%m-%d"),
            w.allocation_fraction * 100.0,
            w.allocation_amount,
            w.ad_count,
            w.daily_budget_per_ad,
            w.message_ad_count,
            w.link_ad_count,
            w.period_over_period_change,
        ));
    }
    let s = PlanSummary::from_weeks(weeks);
    out.push_str(&format!(
        "total {:.2} over {} weeks, {} ads",
        s.total_allocated, s.weeks, s.total_ads
    ));
    if let Some(peak) = s.peak_week {
        out.push_str(&format!(", peak week {peak}"));
    }
    out
}

pub fn strategy_tables() -> String {
    StrategyVariant::ALL
        .iter()
        .map(|v| {
            let cfg = v.config();
            let shares: Vec<String> = cfg
                .percentages
                .iter()
                .map(|p| format!("{:.0}%", p * 100.0))
                .collect();
            let sum: f64 = cfg.percentages.iter().sum();
            format!(
                "{v}: {} weeks from {:?}, {:?} rounding, [{}] = {:.0}%",
                cfg.percentages.len(),
                cfg.week_start,
                cfg.rounding,
                shares.join(" "),
                sum * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
