//! Project milestones.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{cmp_unset_last, Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// A checkpoint inside a [`super::Project`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Owning project; not checked against existing projects
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Entity for Milestone {
    const COLLECTION: &'static str = "milestones";
    const NAME: &'static str = "Milestone";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("projectId", FieldKind::NonEmptyText),
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::optional("dueDate", FieldKind::Date),
        FieldSpec::defaulted("completed", FieldKind::Boolean),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Parent];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.project_id)
    }

    fn compare(&self, other: &Self) -> Ordering {
        cmp_unset_last(self.due_date.as_deref(), other.due_date.as_deref())
    }
}
