//! Habits and their completion history.

use serde::{Deserialize, Serialize};

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// Accepted `frequency` values
pub const FREQUENCIES: &[&str] = &["daily", "weekly"];

/// A recurring habit and the days it was completed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    /// `YYYY-MM-DD` dates on which the habit was done
    #[serde(default)]
    pub completed_dates: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_frequency() -> String {
    "daily".to_string()
}

impl Entity for Habit {
    const COLLECTION: &'static str = "habits";
    const NAME: &'static str = "Habit";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::NonEmptyText),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::defaulted("frequency", FieldKind::OneOf(FREQUENCIES)),
        FieldSpec::defaulted("completedDates", FieldKind::DateList),
        FieldSpec::optional("color", FieldKind::Text),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Period];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn period(&self) -> Option<&str> {
        Some(&self.frequency)
    }
}
