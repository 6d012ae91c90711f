//! Projects, the parents of milestones and tasks.

use serde::{Deserialize, Serialize};

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// Accepted `status` values
pub const STATUSES: &[&str] = &["planning", "active", "on-hold", "completed"];

/// A project grouping milestones and tasks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Percent complete, 0 to 100
    #[serde(default)]
    pub progress: i64,
}

fn default_status() -> String {
    "planning".to_string()
}

impl Entity for Project {
    const COLLECTION: &'static str = "projects";
    const NAME: &'static str = "Project";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::NonEmptyText),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::defaulted("status", FieldKind::OneOf(STATUSES)),
        FieldSpec::optional("color", FieldKind::Text),
        FieldSpec::optional("dueDate", FieldKind::Date),
        FieldSpec::defaulted("progress", FieldKind::Integer),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn check(&self) -> Result<(), ValidationError> {
        if !(0..=100).contains(&self.progress) {
            return Err(ValidationError::single("progress", "must be between 0 and 100"));
        }
        Ok(())
    }
}
