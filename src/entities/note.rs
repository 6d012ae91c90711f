//! Sticky notes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// A sticky note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(flatten)]
    pub meta: RecordMeta,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}

impl Entity for Note {
    const COLLECTION: &'static str = "notes";
    const NAME: &'static str = "Note";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::defaulted("title", FieldKind::Text),
        FieldSpec::required("content", FieldKind::NonEmptyText),
        FieldSpec::optional("color", FieldKind::Text),
        FieldSpec::defaulted("pinned", FieldKind::Boolean),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Pinned notes first, newest first within each group
    fn compare(&self, other: &Self) -> Ordering {
        other
            .pinned
            .cmp(&self.pinned)
            .then_with(|| other.meta.created_at.cmp(&self.meta.created_at))
    }
}
