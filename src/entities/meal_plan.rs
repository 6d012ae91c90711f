//! Meal planner entries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// Meal slots in the order they are eaten
pub const MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner", "snack"];

/// One planned meal on one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub date: String,
    pub meal_type: String,
    pub name: String,
    #[serde(default)]
    pub calories: i64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MealPlan {
    fn slot(&self) -> usize {
        MEAL_TYPES
            .iter()
            .position(|t| *t == self.meal_type)
            .unwrap_or(MEAL_TYPES.len())
    }
}

impl Entity for MealPlan {
    const COLLECTION: &'static str = "meal-plans";
    const NAME: &'static str = "Meal plan";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required("mealType", FieldKind::OneOf(MEAL_TYPES)),
        FieldSpec::required("name", FieldKind::NonEmptyText),
        FieldSpec::defaulted("calories", FieldKind::Integer),
        FieldSpec::defaulted("protein", FieldKind::Number),
        FieldSpec::defaulted("carbs", FieldKind::Number),
        FieldSpec::defaulted("fat", FieldKind::Number),
        FieldSpec::optional("notes", FieldKind::Text),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.meal_type)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| self.slot().cmp(&other.slot()))
    }
}
