//! One-off and recurring reminders.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{cmp_unset_last, Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// Accepted `frequency` values
pub const FREQUENCIES: &[&str] = &["once", "daily", "weekly", "monthly"];

/// Something to be reminded of, once or on a schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_frequency() -> String {
    "once".to_string()
}

impl Entity for Reminder {
    const COLLECTION: &'static str = "reminders";
    const NAME: &'static str = "Reminder";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::optional("date", FieldKind::Date),
        FieldSpec::optional("time", FieldKind::Time),
        FieldSpec::defaulted("frequency", FieldKind::OneOf(FREQUENCIES)),
        FieldSpec::defaulted("completed", FieldKind::Boolean),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Period];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn period(&self) -> Option<&str> {
        Some(&self.frequency)
    }

    fn compare(&self, other: &Self) -> Ordering {
        cmp_unset_last(self.date.as_deref(), other.date.as_deref())
            .then_with(|| cmp_unset_last(self.time.as_deref(), other.time.as_deref()))
    }
}
