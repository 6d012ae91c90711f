//! Query-string filters for list endpoints.

use serde::Deserialize;

use crate::entities::{Entity, Filter};
use crate::schema::{FieldError, ValidationError};
use crate::utils::datetime;

/// Optional filters accepted by every list endpoint.
///
/// Each entity declares which of these it honours through
/// [`Entity::FILTERS`]; the rest are ignored for that entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    /// Exact `YYYY-MM-DD` match
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub period: Option<String>,
    /// Inclusive lower bound
    pub start_date: Option<String>,
    /// Inclusive upper bound
    pub end_date: Option<String>,
    pub parent_id: Option<String>,
}

impl ListFilter {
    /// Records dated exactly `date`
    pub fn on_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Records dated within `start..=end`
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Self::default()
        }
    }

    /// Records of one type, category or status
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Records belonging to `parent_id`
    pub fn for_parent(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::default()
        }
    }

    /// Whether no filter is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject malformed dates and inverted ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("date", &self.date),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ] {
            if let Some(value) = value {
                if !datetime::is_valid_date(value) {
                    errors.push(FieldError::new(name, "must be a date in YYYY-MM-DD format"));
                }
            }
        }

        if errors.is_empty() {
            if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
                if start > end {
                    errors.push(FieldError::new("endDate", "must not be before startDate"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }

    /// Whether a record passes every filter its entity supports
    pub fn matches<E: Entity>(&self, record: &E) -> bool {
        E::FILTERS.iter().all(|filter| match filter {
            Filter::Date => self.matches_date(record.date()),
            Filter::Type => matches_exact(self.kind.as_deref(), record.kind()),
            Filter::Period => matches_exact(self.period.as_deref(), record.period()),
            Filter::Parent => matches_exact(self.parent_id.as_deref(), record.parent_id()),
        })
    }

    fn matches_date(&self, value: Option<&str>) -> bool {
        if self.date.is_none() && self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };

        // YYYY-MM-DD compares chronologically as plain text
        self.date.as_deref().map_or(true, |date| value == date)
            && self.start_date.as_deref().map_or(true, |start| value >= start)
            && self.end_date.as_deref().map_or(true, |end| value <= end)
    }
}

fn matches_exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        Some(wanted) => actual == Some(wanted),
        None => true,
    }
}
