use chrono::NaiveDate;
use dashboard::entities::{Anniversary, Entity, Expense, Habit, Subscription};
use dashboard::insights::{habit_streak, monthly_cost, summarize_expenses, summarize_subscriptions, upcoming_anniversaries};
use serde_json::{json, Value};

fn record<E: Entity>(id: &str, fields: Value) -> E {
    let mut document = json!({
        "id": id,
        "userId": "default-user",
        "createdAt": "2025-01-01T00:00:00Z",
    });
    if let (Some(target), Value::Object(fields)) = (document.as_object_mut(), fields) {
        target.extend(fields);
    }
    serde_json::from_value(document).unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn daily(dates: &[&str]) -> Habit {
    record("h1", json!({ "name": "Read", "frequency": "daily", "completedDates": dates }))
}

#[test]
fn test_daily_streak_including_today() {
    let habit = daily(&["2025-03-08", "2025-03-09", "2025-03-10"]);
    let streak = habit_streak(&habit, day("2025-03-10"));

    assert_eq!(streak.habit_id, "h1");
    assert_eq!(streak.current_streak, 3);
    assert_eq!(streak.longest_streak, 3);
    assert!(streak.done_this_period);
}

#[test]
fn test_daily_streak_survives_until_day_is_over() {
    let habit = daily(&["2025-03-08", "2025-03-09", "2025-03-10"]);

    let next_day = habit_streak(&habit, day("2025-03-11"));
    assert_eq!(next_day.current_streak, 3);
    assert!(!next_day.done_this_period);

    let broken = habit_streak(&habit, day("2025-03-12"));
    assert_eq!(broken.current_streak, 0);
    assert_eq!(broken.longest_streak, 3);
}

#[test]
fn test_longest_streak_and_duplicates() {
    let habit = daily(&[
        "2025-03-01",
        "2025-03-02",
        "2025-03-05",
        "2025-03-06",
        "2025-03-06",
        "2025-03-07",
        "2025-03-09",
    ]);
    let streak = habit_streak(&habit, day("2025-03-09"));

    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 3);
}

#[test]
fn test_future_dates_are_ignored() {
    let habit = daily(&["2025-03-10", "2025-03-11"]);
    let streak = habit_streak(&habit, day("2025-03-10"));
    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.longest_streak, 1);
}

#[test]
fn test_weekly_streak_counts_calendar_weeks() {
    // 2025-03-03 is a Monday
    let habit: Habit = record(
        "h2",
        json!({
            "name": "Long run",
            "frequency": "weekly",
            "completedDates": ["2025-03-04", "2025-03-06", "2025-03-12", "2025-03-17"],
        }),
    );

    let streak = habit_streak(&habit, day("2025-03-19"));
    assert_eq!(streak.current_streak, 3);
    assert_eq!(streak.longest_streak, 3);
    assert!(streak.done_this_period);

    let later = habit_streak(&habit, day("2025-03-24"));
    assert_eq!(later.current_streak, 3);
    assert!(!later.done_this_period);
}

#[test]
fn test_monthly_cost_normalization() {
    assert_eq!(monthly_cost(10.0, "monthly"), 10.0);
    assert_eq!(monthly_cost(120.0, "yearly"), 10.0);
    assert_eq!(monthly_cost(30.0, "quarterly"), 10.0);
    assert_eq!(monthly_cost(3.0, "weekly"), 13.0);
}

#[test]
fn test_subscription_totals_skip_inactive() {
    let subscriptions: Vec<Subscription> = vec![
        record("s1", json!({ "name": "Music", "cost": 10.0, "billingCycle": "monthly" })),
        record("s2", json!({ "name": "Cloud", "cost": 120.0, "billingCycle": "yearly" })),
        record("s3", json!({ "name": "Gym", "cost": 100.0, "billingCycle": "monthly", "active": false })),
    ];

    let summary = summarize_subscriptions(&subscriptions);
    assert_eq!(summary.subscriptions.len(), 3);
    assert_eq!(summary.monthly_total, 20.0);
    assert_eq!(summary.yearly_total, 240.0);

    let cloud = &summary.subscriptions[1];
    assert_eq!(cloud.monthly_cost, 10.0);
    assert_eq!(cloud.yearly_cost, 120.0);
    assert!(!summary.subscriptions[2].active);
}

#[test]
fn test_upcoming_anniversaries() {
    let anniversaries: Vec<Anniversary> = vec![
        record("a1", json!({ "title": "New year", "date": "2020-01-01" })),
        record("a2", json!({ "title": "Birthday", "date": "1990-06-20", "category": "birthday" })),
        record("a3", json!({ "title": "Wedding", "date": "2000-06-15", "category": "wedding" })),
    ];

    let upcoming = upcoming_anniversaries(&anniversaries, day("2025-06-15"), None);
    let titles: Vec<_> = upcoming.iter().map(|u| u.title.as_str()).collect();
    assert_eq!(titles, ["Wedding", "Birthday", "New year"]);

    assert_eq!(upcoming[0].days_until, 0);
    assert_eq!(upcoming[0].years, 25);
    assert_eq!(upcoming[1].next_date, "2025-06-20");
    assert_eq!(upcoming[1].days_until, 5);
    assert_eq!(upcoming[1].years, 35);
    assert_eq!(upcoming[2].next_date, "2026-01-01");

    let soon = upcoming_anniversaries(&anniversaries, day("2025-06-15"), Some(30));
    assert_eq!(soon.len(), 2);
}

#[test]
fn test_leap_day_anniversary() {
    let anniversaries: Vec<Anniversary> = vec![record("a1", json!({ "title": "Leap", "date": "2020-02-29" }))];
    let upcoming = upcoming_anniversaries(&anniversaries, day("2025-01-01"), None);
    assert_eq!(upcoming[0].next_date, "2025-02-28");
}

#[test]
fn test_future_anniversary_counts_from_its_own_date() {
    let anniversaries: Vec<Anniversary> = vec![record("a1", json!({ "title": "Opening", "date": "2030-05-01" }))];
    let upcoming = upcoming_anniversaries(&anniversaries, day("2025-01-01"), None);

    assert_eq!(upcoming[0].next_date, "2030-05-01");
    assert_eq!(upcoming[0].years, 0);
    assert_eq!(upcoming[0].days_until, 1946);
}

#[test]
fn test_expense_summary() {
    let expenses: Vec<Expense> = vec![
        record("e1", json!({ "description": "Lunch", "amount": 10.10, "category": "food", "date": "2025-02-01" })),
        record("e2", json!({ "description": "Snack", "amount": 5.25, "category": "food", "date": "2025-02-02" })),
        record("e3", json!({ "description": "Train", "amount": 100, "category": "travel", "date": "2025-02-03" })),
    ];

    let summary = summarize_expenses(&expenses);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.total, 115.35);
    assert_eq!(summary.by_category["food"], 15.35);
    assert_eq!(summary.by_category["travel"], 100.0);
}

#[test]
fn test_empty_expense_summary() {
    let summary = summarize_expenses(&[]);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total, 0.0);
    assert!(summary.by_category.is_empty());
}
