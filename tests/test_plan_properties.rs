//! Properties every strategy's weekly plan must hold.

mod common;

use adplan::domain::values::answer_messages::AnswerMessages;
use adplan::domain::values::strategy_variant::StrategyVariant;
use chrono::Duration;
use common::{date, input, setup};

const BUDGETS: [f64; 7] = [1.0, 20.0, 99.0, 1000.0, 4321.5, 25_000.0, 1_000_000.0];

#[test]
fn test_plan_is_deterministic() {
    let app = setup();
    for v in StrategyVariant::ALL {
        let i = input(2500.0, AnswerMessages::Yes);
        assert_eq!(app.plan(v, &i).unwrap(), app.plan(v, &i).unwrap(), "{v}");
    }
}

#[test]
fn test_weeks_are_contiguous() {
    let app = setup();
    for v in StrategyVariant::ALL {
        let weeks = app.plan(v, &input(1000.0, AnswerMessages::No)).unwrap();
        assert_eq!(weeks.len(), v.weeks(), "{v}");
        for (i, w) in weeks.iter().enumerate() {
            assert_eq!(w.week_index as usize, i + 1);
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].start_date, pair[0].start_date + Duration::days(7), "{v}");
        }
    }
}

#[test]
fn test_ad_counts_and_daily_budgets_have_floors() {
    let app = setup();
    for v in StrategyVariant::ALL {
        for budget in BUDGETS {
            for answer in [AnswerMessages::Yes, AnswerMessages::No] {
                for w in app.plan(v, &input(budget, answer)).unwrap() {
                    assert!(w.ad_count >= 1, "{v} {budget}");
                    assert!(w.daily_budget_per_ad >= 1.0, "{v} {budget}");
                    assert!(w.allocation_amount >= 0.0, "{v} {budget}");
                }
            }
        }
    }
}

#[test]
fn test_split_conserves_ad_count() {
    let app = setup();
    for v in StrategyVariant::ALL {
        for budget in BUDGETS {
            for answer in [AnswerMessages::Yes, AnswerMessages::No] {
                for w in app.plan(v, &input(budget, answer)).unwrap() {
                    assert_eq!(w.message_ad_count + w.link_ad_count, w.ad_count);
                    if answer == AnswerMessages::No {
                        assert_eq!(w.message_ad_count, 0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_large_weeks_reserve_two_message_ads() {
    let app = setup();
    let weeks = app
        .plan(StrategyVariant::Launching, &input(25_000.0, AnswerMessages::Yes))
        .unwrap();
    // 25000 * 0.21 = 5250 -> ceil(ceil(5250 / 8) / 7) = 94 ads
    let last = weeks.last().unwrap();
    assert_eq!(last.ad_count, 94);
    assert_eq!(last.message_ad_count, 2);
    assert_eq!(last.link_ad_count, 92);
}

#[test]
fn test_launching_scenario() {
    let app = setup();
    let weeks = app
        .plan(StrategyVariant::Launching, &input(1000.0, AnswerMessages::Yes))
        .unwrap();
    let w1 = &weeks[0];
    assert_eq!(w1.start_date, date(2024, 1, 1));
    assert_eq!(w1.calendar_week_label, "2024-W01");
    assert_eq!(w1.level, 1);
    assert_eq!(w1.allocation_amount, 60.0);
    assert_eq!(w1.ad_count, 3);
    assert_eq!(w1.link_ad_count, 2);
    assert_eq!(w1.message_ad_count, 1);
    assert!((w1.daily_budget_per_ad - 2.857).abs() < 0.001);
    assert_eq!(weeks[6].level, 3);
}

#[test]
fn test_sunday_variants_start_on_sunday() {
    let app = setup();
    let weeks = app
        .plan(StrategyVariant::Analysis, &input(1000.0, AnswerMessages::Yes))
        .unwrap();
    assert_eq!(weeks[0].start_date, date(2024, 1, 7));
    assert_eq!(weeks[0].calendar_week_label, "2024-W01");
    assert_eq!(weeks[1].calendar_week_label, "2024-W02");
}

#[test]
fn test_setup_rounds_up_to_cents() {
    let app = setup();
    let weeks = app
        .plan(StrategyVariant::Setup, &input(333.33, AnswerMessages::No))
        .unwrap();
    // 333.33 * 0.05 = 16.6665
    assert_eq!(weeks[0].allocation_amount, 16.67);
    // 333.33 * 0.12 = 39.9996
    assert_eq!(weeks[6].allocation_amount, 40.0);
}

#[test]
fn test_zero_budget_policy() {
    let app = setup();
    for v in StrategyVariant::ALL {
        for w in app.plan(v, &input(0.0, AnswerMessages::Yes)).unwrap() {
            assert_eq!(w.allocation_amount, 0.0, "{v}");
            assert_eq!(w.ad_count, 1, "{v}");
            assert_eq!(w.daily_budget_per_ad, 1.0, "{v}");
            assert_eq!(w.period_over_period_change, 0.0, "{v}");
        }
    }
}

#[tokio::test]
async fn test_usd_setup_matches_plain_plan() {
    let app = setup();
    let i = input(4321.5, AnswerMessages::Yes);
    let stored = app.setup("user-usd", &i).await.unwrap();
    let plain = app.plan(StrategyVariant::Setup, &i).unwrap();
    assert_eq!(stored.conversion_rate, 1.0);
    assert!(!stored.rate_fallback);
    assert_eq!(stored.weeks, plain);
}

