//! Workout plans and logged workout sessions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// Accepted `difficulty` values
pub const DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];

/// A reusable workout routine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub duration_minutes: i64,
}

fn default_difficulty() -> String {
    "beginner".to_string()
}

impl Entity for WorkoutPlan {
    const COLLECTION: &'static str = "workout-plans";
    const NAME: &'static str = "Workout plan";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::NonEmptyText),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::defaulted("difficulty", FieldKind::OneOf(DIFFICULTIES)),
        FieldSpec::defaulted("exercises", FieldKind::TextList),
        FieldSpec::defaulted("durationMinutes", FieldKind::Integer),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.difficulty)
    }

    fn check(&self) -> Result<(), ValidationError> {
        non_negative("durationMinutes", self.duration_minutes)
    }
}

/// A logged workout, optionally following a [`WorkoutPlan`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Id of the followed plan; not checked against existing plans
    #[serde(default)]
    pub plan_id: Option<String>,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub duration_minutes: i64,
    #[serde(default)]
    pub calories_burned: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Entity for WorkoutSession {
    const COLLECTION: &'static str = "workouts";
    const NAME: &'static str = "Workout";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("planId", FieldKind::Text),
        FieldSpec::required("name", FieldKind::NonEmptyText),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::defaulted("durationMinutes", FieldKind::Integer),
        FieldSpec::defaulted("caloriesBurned", FieldKind::Integer),
        FieldSpec::optional("notes", FieldKind::Text),
        FieldSpec::defaulted("completed", FieldKind::Boolean),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Parent];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }

    fn parent_id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }

    /// Newest first
    fn compare(&self, other: &Self) -> Ordering {
        other.date.cmp(&self.date)
    }

    fn check(&self) -> Result<(), ValidationError> {
        non_negative("durationMinutes", self.duration_minutes)?;
        non_negative("caloriesBurned", self.calories_burned)
    }
}

fn non_negative(field: &str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        Err(ValidationError::single(field, "cannot be negative"))
    } else {
        Ok(())
    }
}
