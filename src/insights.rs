//! Derived figures shown by the widgets.
//!
//! These are pure functions over already-loaded records so they can be
//! tested without a store. The `/api/insights/*` handlers load the records
//! and pass them in together with the current date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::entities::{Anniversary, Entity, Expense, Habit, Subscription};
use crate::utils::datetime;

/// Streak figures for one habit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreak {
    pub habit_id: String,
    pub name: String,
    pub frequency: String,
    /// Consecutive periods (days or weeks) ending with the current or previous one
    pub current_streak: u32,
    pub longest_streak: u32,
    pub done_this_period: bool,
}

/// Calculate the streaks of a habit as of `today`.
///
/// Daily habits count consecutive days, weekly habits consecutive
/// Monday-based weeks. A streak stays alive until the period after the last
/// completed one has fully passed.
pub fn habit_streak(habit: &Habit, today: NaiveDate) -> HabitStreak {
    let weekly = habit.frequency == "weekly";
    let period_of = |date: NaiveDate| -> i64 {
        let day = i64::from(date.num_days_from_ce());
        if weekly {
            (day - i64::from(date.weekday().num_days_from_monday())) / 7
        } else {
            day
        }
    };

    let periods: BTreeSet<i64> = habit
        .completed_dates
        .iter()
        .filter_map(|d| datetime::parse_date(d).ok())
        .filter(|d| *d <= today)
        .map(period_of)
        .collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<i64> = None;
    for &period in &periods {
        run = match previous {
            Some(p) if period == p + 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(period);
    }

    let now = period_of(today);
    let done_this_period = periods.contains(&now);
    let mut cursor = if done_this_period { now } else { now - 1 };
    let mut current = 0u32;
    while periods.contains(&cursor) {
        current += 1;
        cursor -= 1;
    }

    HabitStreak {
        habit_id: habit.id().to_string(),
        name: habit.name.clone(),
        frequency: habit.frequency.clone(),
        current_streak: current,
        longest_streak: longest,
        done_this_period,
    }
}

/// Cost of one billing cycle expressed per month
pub fn monthly_cost(cost: f64, billing_cycle: &str) -> f64 {
    match billing_cycle {
        "weekly" => cost * 52.0 / 12.0,
        "quarterly" => cost / 3.0,
        "yearly" => cost / 12.0,
        _ => cost,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One subscription normalized to monthly and yearly cost
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCost {
    pub subscription_id: String,
    pub name: String,
    pub billing_cycle: String,
    pub cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub subscriptions: Vec<SubscriptionCost>,
    /// Totals over active subscriptions only
    pub monthly_total: f64,
    pub yearly_total: f64,
}

/// Normalize every subscription to monthly and yearly cost
pub fn summarize_subscriptions(subscriptions: &[Subscription]) -> SubscriptionSummary {
    let items: Vec<SubscriptionCost> = subscriptions
        .iter()
        .map(|s| {
            let monthly = monthly_cost(s.cost, &s.billing_cycle);
            SubscriptionCost {
                subscription_id: s.id().to_string(),
                name: s.name.clone(),
                billing_cycle: s.billing_cycle.clone(),
                cost: s.cost,
                monthly_cost: round_cents(monthly),
                yearly_cost: round_cents(monthly * 12.0),
                active: s.active,
            }
        })
        .collect();

    let monthly_total: f64 = subscriptions
        .iter()
        .filter(|s| s.active)
        .map(|s| monthly_cost(s.cost, &s.billing_cycle))
        .sum();

    SubscriptionSummary {
        subscriptions: items,
        monthly_total: round_cents(monthly_total),
        yearly_total: round_cents(monthly_total * 12.0),
    }
}

/// Next occurrence of one anniversary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingAnniversary {
    pub anniversary_id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub next_date: String,
    pub days_until: i64,
    /// Years completed on `next_date`
    pub years: i32,
}

/// Next occurrence of every anniversary, soonest first.
///
/// `within_days` limits the result to occurrences at most that many days away.
pub fn upcoming_anniversaries(
    anniversaries: &[Anniversary],
    today: NaiveDate,
    within_days: Option<i64>,
) -> Vec<UpcomingAnniversary> {
    let mut upcoming: Vec<UpcomingAnniversary> = anniversaries
        .iter()
        .filter_map(|a| {
            let original = datetime::parse_date(&a.date).ok()?;
            let next = datetime::next_anniversary(original, today);
            Some(UpcomingAnniversary {
                anniversary_id: a.id().to_string(),
                title: a.title.clone(),
                category: a.category.clone(),
                date: a.date.clone(),
                next_date: datetime::format_ymd(next),
                days_until: (next - today).num_days(),
                years: next.year() - original.year(),
            })
        })
        .filter(|u| within_days.map_or(true, |limit| u.days_until <= limit))
        .collect();

    upcoming.sort_by_key(|u| u.days_until);
    upcoming
}

/// Spending totals over a set of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

/// Total and per-category spending
pub fn summarize_expenses(expenses: &[Expense]) -> ExpenseSummary {
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.clone()).or_default() += expense.amount;
    }
    for total in by_category.values_mut() {
        *total = round_cents(*total);
    }

    ExpenseSummary {
        count: expenses.len(),
        total: round_cents(expenses.iter().map(|e| e.amount).sum()),
        by_category,
    }
}
