//! Read-only endpoints serving derived figures.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ApiError;
use super::AppState;
use crate::entities::{Anniversary, Expense, Habit, Subscription};
use crate::insights::{self, ExpenseSummary, HabitStreak, SubscriptionSummary, UpcomingAnniversary};
use crate::repositories::ListFilter;
use crate::schema::ValidationError;
use crate::utils::datetime;

/// `/api/insights/*` routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/insights/habits", get(habit_streaks))
        .route("/api/insights/subscriptions", get(subscription_costs))
        .route("/api/insights/anniversaries", get(upcoming_anniversaries))
        .route("/api/insights/expenses", get(expense_summary))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsightQuery {
    /// Reference date instead of today
    date: Option<String>,
    within_days: Option<i64>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl InsightQuery {
    fn from_request(query: Result<Query<InsightQuery>, QueryRejection>) -> Result<Self, ApiError> {
        query
            .map(|Query(q)| q)
            .map_err(|e| ValidationError::single("query", e.body_text()).into())
    }

    fn reference_date(&self) -> Result<NaiveDate, ApiError> {
        match &self.date {
            Some(date) => datetime::parse_date(date)
                .map_err(|_| ValidationError::single("date", "must be a date in YYYY-MM-DD format").into()),
            None => Ok(datetime::today()),
        }
    }
}

async fn habit_streaks(
    State(state): State<AppState>,
    query: Result<Query<InsightQuery>, QueryRejection>,
) -> Result<Json<Vec<HabitStreak>>, ApiError> {
    let today = InsightQuery::from_request(query)?.reference_date()?;
    let habits = state
        .repo::<Habit>()
        .list(state.user_id(), &ListFilter::default())
        .await?;

    Ok(Json(habits.iter().map(|h| insights::habit_streak(h, today)).collect()))
}

async fn subscription_costs(State(state): State<AppState>) -> Result<Json<SubscriptionSummary>, ApiError> {
    let subscriptions = state
        .repo::<Subscription>()
        .list(state.user_id(), &ListFilter::default())
        .await?;

    Ok(Json(insights::summarize_subscriptions(&subscriptions)))
}

async fn upcoming_anniversaries(
    State(state): State<AppState>,
    query: Result<Query<InsightQuery>, QueryRejection>,
) -> Result<Json<Vec<UpcomingAnniversary>>, ApiError> {
    let query = InsightQuery::from_request(query)?;
    let today = query.reference_date()?;
    if query.within_days.is_some_and(|days| days < 0) {
        return Err(ValidationError::single("withinDays", "cannot be negative").into());
    }

    let anniversaries = state
        .repo::<Anniversary>()
        .list(state.user_id(), &ListFilter::default())
        .await?;

    Ok(Json(insights::upcoming_anniversaries(&anniversaries, today, query.within_days)))
}

async fn expense_summary(
    State(state): State<AppState>,
    query: Result<Query<InsightQuery>, QueryRejection>,
) -> Result<Json<ExpenseSummary>, ApiError> {
    let query = InsightQuery::from_request(query)?;
    let filter = ListFilter {
        start_date: query.start_date,
        end_date: query.end_date,
        ..ListFilter::default()
    };

    let expenses = state.repo::<Expense>().list(state.user_id(), &filter).await?;
    Ok(Json(insights::summarize_expenses(&expenses)))
}
