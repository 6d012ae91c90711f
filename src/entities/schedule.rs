//! Schedule (calendar) events.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// A calendar entry in the daily schedule widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub date: String,
    /// Unset for all-day events
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entity for ScheduleEvent {
    const COLLECTION: &'static str = "schedule";
    const NAME: &'static str = "Schedule event";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::optional("startTime", FieldKind::Time),
        FieldSpec::optional("endTime", FieldKind::Time),
        FieldSpec::optional("location", FieldKind::Text),
        FieldSpec::optional("category", FieldKind::Text),
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
        self.category.as_deref()
    }

    /// All-day events first, then by start time
    fn compare(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.start_time.cmp(&other.start_time))
    }

    fn check(&self) -> Result<(), ValidationError> {
        match (&self.start_time, &self.end_time) {
            // HH:MM strings order the same way as the times they encode
            (Some(start), Some(end)) if end < start => {
                Err(ValidationError::single("endTime", "must not be before startTime"))
            }
            (None, Some(_)) => Err(ValidationError::single("startTime", "is required when endTime is set")),
            _ => Ok(()),
        }
    }
}
