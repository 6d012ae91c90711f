//! Measurable goals.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{cmp_unset_last, Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// Accepted `period` values
pub const PERIODS: &[&str] = &["weekly", "monthly", "quarterly", "yearly"];

/// A measurable goal with progress toward a target value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default)]
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

fn default_period() -> String {
    "monthly".to_string()
}

impl Entity for Goal {
    const COLLECTION: &'static str = "goals";
    const NAME: &'static str = "Goal";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::optional("category", FieldKind::Text),
        FieldSpec::defaulted("period", FieldKind::OneOf(PERIODS)),
        FieldSpec::defaulted("targetValue", FieldKind::Number),
        FieldSpec::defaulted("currentValue", FieldKind::Number),
        FieldSpec::optional("unit", FieldKind::Text),
        FieldSpec::optional("targetDate", FieldKind::Date),
        FieldSpec::defaulted("completed", FieldKind::Boolean),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Period, Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn period(&self) -> Option<&str> {
        Some(&self.period)
    }

    fn compare(&self, other: &Self) -> Ordering {
        cmp_unset_last(self.target_date.as_deref(), other.target_date.as_deref())
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.target_value < 0.0 {
            return Err(ValidationError::single("targetValue", "cannot be negative"));
        }
        if self.current_value < 0.0 {
            return Err(ValidationError::single("currentValue", "cannot be negative"));
        }
        Ok(())
    }
}
