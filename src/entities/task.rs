//! To-do tasks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// Accepted `priority` values
pub const PRIORITIES: &[&str] = &["low", "medium", "high"];

/// A to-do item in the task widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Position in the manually ordered list
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl Entity for Task {
    const COLLECTION: &'static str = "tasks";
    const NAME: &'static str = "Task";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("text", FieldKind::NonEmptyText),
        FieldSpec::defaulted("completed", FieldKind::Boolean),
        FieldSpec::defaulted("order", FieldKind::Integer),
        FieldSpec::optional("priority", FieldKind::OneOf(PRIORITIES)),
        FieldSpec::optional("dueDate", FieldKind::Date),
        FieldSpec::optional("projectId", FieldKind::Text),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Parent];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    fn parent_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.order.cmp(&other.order)
    }
}
