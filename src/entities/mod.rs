//! Typed records backing the dashboard widgets.
//!
//! Every entity is a plain serde struct carrying [`RecordMeta`] plus its
//! domain fields, and implements [`Entity`] to describe its collection, its
//! writable field schema, and the filter and sort hooks its list endpoint uses.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::schema::{FieldSpec, ValidationError};

pub mod anniversary;
pub mod bookmark;
pub mod expense;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod meal_plan;
pub mod milestone;
pub mod note;
pub mod project;
pub mod reminder;
pub mod schedule;
pub mod subscription;
pub mod task;
pub mod workout;

pub use anniversary::Anniversary;
pub use bookmark::Bookmark;
pub use expense::Expense;
pub use goal::Goal;
pub use habit::Habit;
pub use journal::JournalEntry;
pub use meal_plan::MealPlan;
pub use milestone::Milestone;
pub use note::Note;
pub use project::Project;
pub use reminder::Reminder;
pub use schedule::ScheduleEvent;
pub use subscription::Subscription;
pub use task::Task;
pub use workout::{WorkoutPlan, WorkoutSession};

/// Fields every record carries. All of them are assigned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// List filters an entity can honour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// `date`, `startDate` and `endDate` match against [`Entity::date`]
    Date,
    /// `type` matches against [`Entity::kind`]
    Type,
    /// `period` matches against [`Entity::period`]
    Period,
    /// `parentId` matches against [`Entity::parent_id`]
    Parent,
}

/// A record type stored in its own collection.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection key, also the URL segment under `/api`
    const COLLECTION: &'static str;

    /// Human-readable name used in error messages
    const NAME: &'static str;

    /// Client-writable fields
    const FIELDS: &'static [FieldSpec];

    /// Filters the list endpoint applies; others are ignored
    const FILTERS: &'static [Filter] = &[];

    fn meta(&self) -> &RecordMeta;

    fn id(&self) -> &str {
        &self.meta().id
    }

    fn user_id(&self) -> &str {
        &self.meta().user_id
    }

    fn date(&self) -> Option<&str> {
        None
    }

    fn kind(&self) -> Option<&str> {
        None
    }

    fn period(&self) -> Option<&str> {
        None
    }

    fn parent_id(&self) -> Option<&str> {
        None
    }

    /// List order. Ties keep creation order.
    fn compare(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }

    /// Cross-field rules the field schema cannot express
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Compare optional values with unset values sorted last
pub(crate) fn cmp_unset_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::cmp_unset_last;
    use std::cmp::Ordering;

    #[test]
    fn unset_values_sort_last() {
        assert_eq!(cmp_unset_last(Some("2025-01-01"), None), Ordering::Less);
        assert_eq!(cmp_unset_last(None, Some("2025-01-01")), Ordering::Greater);
        assert_eq!(cmp_unset_last(Some("a"), Some("b")), Ordering::Less);
        assert_eq!(cmp_unset_last::<&str>(None, None), Ordering::Equal);
    }
}
