//! Ad fan-out heuristics.
//!
//! Maps a weekly budget (always in USD) to the number of ads worth running
//! in parallel, and splits those ads between message and link-click
//! objectives.

use serde::Serialize;

use crate::domain::values::answer_messages::AnswerMessages;

/// One step of the piecewise ad-count table: amounts strictly below
/// `below` are divided by `divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdCountTier {
    pub below: f64,
    pub divisor: f64,
}

/// Largest count an `f64` amount maps to without losing integer precision.
pub const MAX_AD_COUNT: u64 = 1 << 53;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdCountThresholds {
    pub tiers: &'static [AdCountTier],
    /// Divisor for amounts above every tier.
    pub fallback_divisor: f64,
    pub days_per_week: f64,
}

pub const DEFAULT_TIERS: &[AdCountTier] = &[
    AdCountTier { below: 100.0, divisor: 3.0 },
    AdCountTier { below: 400.0, divisor: 6.0 },
];

impl Default for AdCountThresholds {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS,
            fallback_divisor: 8.0,
            days_per_week: 7.0,
        }
    }
}

impl AdCountThresholds {
    fn divisor_for(&self, amount_usd: f64) -> f64 {
        self.tiers
            .iter()
            .find(|t| amount_usd < t.below)
            .map(|t| t.divisor)
            .unwrap_or(self.fallback_divisor)
    }

    /// `ceil(ceil(amount / divisor) / days_per_week)`, clamped to at least 1
    /// so the per-ad daily budget is always defined.
    ///
    /// `None` when the count is past [`MAX_AD_COUNT`] and can no longer be
    /// represented exactly.
    pub fn ad_count(&self, amount_usd: f64) -> Option<u64> {
        if amount_usd.is_nan() || amount_usd <= 0.0 {
            return Some(1);
        }
        let weekly_ads = (amount_usd / self.divisor_for(amount_usd)).ceil();
        let ads = (weekly_ads / self.days_per_week).ceil();
        if !ads.is_finite() || ads > MAX_AD_COUNT as f64 {
            return None;
        }
        Some((ads as u64).max(1))
    }
}

/// Message/link-click split of a week's ads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdSplit {
    pub message: u64,
    pub link: u64,
}

/// Ads above this count reserve two message ads instead of one.
pub const LARGE_WEEK_AD_COUNT: u64 = 8;

pub fn split_ads(ad_count: u64, answer_messages: AnswerMessages) -> AdSplit {
    if !answer_messages.is_yes() {
        return AdSplit {
            message: 0,
            link: ad_count,
        };
    }
    let reserve = if ad_count > LARGE_WEEK_AD_COUNT { 2 } else { 1 };
    let message = reserve.min(ad_count);
    AdSplit {
        message,
        link: ad_count - message,
    }
}
