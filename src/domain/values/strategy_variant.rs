//! Named planning strategies and their configuration tables.
//!
//! Every strategy runs the same weekly planner; they differ only in the
//! [`PlanConfig`] returned by [`StrategyVariant::config`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::values::ad_count::AdCountThresholds;
use crate::domain::values::rounding::RoundingPolicy;
use crate::domain::values::week::WeekStart;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyVariant {
    Launching,
    Analysis,
    Optimization,
    ExpressLaunching,
    /// Persisted, currency-aware plan created during campaign setup.
    Setup,
}

/// Everything that distinguishes one strategy from another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanConfig {
    /// Share of the total budget spent in each week. Its length is the
    /// number of weeks in the plan. Shares need not sum to 1.
    pub percentages: &'static [f64],
    pub rounding: RoundingPolicy,
    pub week_start: WeekStart,
    pub thresholds: AdCountThresholds,
    /// Weeks per display level.
    pub levels: &'static [u32],
    /// Floor for the per-ad daily budget, in USD.
    pub min_daily_budget: f64,
}

const LAUNCHING: &[f64] = &[0.06, 0.10, 0.10, 0.16, 0.16, 0.21, 0.21];
const ANALYSIS: &[f64] = &[0.10, 0.10, 0.15, 0.15, 0.25, 0.25];
const OPTIMIZATION: &[f64] = &[0.08, 0.08, 0.12, 0.12, 0.15, 0.15, 0.15, 0.20];
const EXPRESS_LAUNCHING: &[f64] = &[0.10, 0.15, 0.20, 0.25, 0.30];
const SETUP: &[f64] = &[0.05, 0.05, 0.08, 0.08, 0.10, 0.10, 0.12, 0.12, 0.15, 0.15];

impl StrategyVariant {
    pub const ALL: [StrategyVariant; 5] = [
        StrategyVariant::Launching,
        StrategyVariant::Analysis,
        StrategyVariant::Optimization,
        StrategyVariant::ExpressLaunching,
        StrategyVariant::Setup,
    ];

    pub fn config(self) -> PlanConfig {
        let base = PlanConfig {
            percentages: LAUNCHING,
            rounding: RoundingPolicy::NearestInteger,
            week_start: WeekStart::Monday,
            thresholds: AdCountThresholds::default(),
            levels: &[2, 2, 3],
            min_daily_budget: 1.0,
        };
        match self {
            StrategyVariant::Launching => base,
            StrategyVariant::Analysis => PlanConfig {
                percentages: ANALYSIS,
                week_start: WeekStart::Sunday,
                levels: &[2, 2, 2],
                ..base
            },
            StrategyVariant::Optimization => PlanConfig {
                percentages: OPTIMIZATION,
                week_start: WeekStart::Sunday,
                levels: &[2, 2, 2, 2],
                ..base
            },
            StrategyVariant::ExpressLaunching => PlanConfig {
                percentages: EXPRESS_LAUNCHING,
                levels: &[2, 3],
                ..base
            },
            StrategyVariant::Setup => PlanConfig {
                percentages: SETUP,
                rounding: RoundingPolicy::CeilToCents,
                week_start: WeekStart::Sunday,
                levels: &[3, 3, 4],
                ..base
            },
        }
    }

    pub fn weeks(self) -> usize {
        self.config().percentages.len()
    }

    /// Only the setup strategy converts through USD and is persisted.
    pub fn is_currency_aware(self) -> bool {
        self == StrategyVariant::Setup
    }
}

impl fmt::Display for StrategyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyVariant::Launching => write!(f, "launching"),
            StrategyVariant::Analysis => write!(f, "analysis"),
            StrategyVariant::Optimization => write!(f, "optimization"),
            StrategyVariant::ExpressLaunching => write!(f, "express_launching"),
            StrategyVariant::Setup => write!(f, "setup"),
        }
    }
}

impl FromStr for StrategyVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "launching" => Ok(StrategyVariant::Launching),
            "analysis" => Ok(StrategyVariant::Analysis),
            "optimization" => Ok(StrategyVariant::Optimization),
            "express_launching" | "express" => Ok(StrategyVariant::ExpressLaunching),
            "setup" => Ok(StrategyVariant::Setup),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_counts() {
        assert_eq!(StrategyVariant::Launching.weeks(), 7);
        assert_eq!(StrategyVariant::Analysis.weeks(), 6);
        assert_eq!(StrategyVariant::Optimization.weeks(), 8);
        assert_eq!(StrategyVariant::ExpressLaunching.weeks(), 5);
        assert_eq!(StrategyVariant::Setup.weeks(), 10);
    }

    #[test]
    fn test_level_layout_covers_every_week() {
        for v in StrategyVariant::ALL {
            let cfg = v.config();
            let covered: u32 = cfg.levels.iter().sum();
            assert_eq!(covered as usize, cfg.percentages.len(), "{v}");
            assert!((2..=4).contains(&cfg.levels.len()), "{v}");
        }
    }

    #[test]
    fn test_only_setup_ceils_to_cents() {
        for v in StrategyVariant::ALL {
            let expected = if v == StrategyVariant::Setup {
                RoundingPolicy::CeilToCents
            } else {
                RoundingPolicy::NearestInteger
            };
            assert_eq!(v.config().rounding, expected);
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for v in StrategyVariant::ALL {
            assert_eq!(v.to_string().parse::<StrategyVariant>().unwrap(), v);
        }
        assert_eq!(
            "Express-Launching".parse::<StrategyVariant>().unwrap(),
            StrategyVariant::ExpressLaunching
        );
        assert!("aggressive".parse::<StrategyVariant>().is_err());
    }
}
