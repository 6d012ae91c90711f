//! Daily journal entries with optional mood and tags.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};

/// Accepted `mood` values, best to worst
pub const MOODS: &[&str] = &["great", "good", "okay", "bad", "awful"];

/// A dated journal entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entity for JournalEntry {
    const COLLECTION: &'static str = "journal";
    const NAME: &'static str = "Journal entry";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required("content", FieldKind::NonEmptyText),
        FieldSpec::optional("mood", FieldKind::OneOf(MOODS)),
        FieldSpec::defaulted("tags", FieldKind::TextList),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }

    fn kind(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    /// Newest first
    fn compare(&self, other: &Self) -> Ordering {
        other.date.cmp(&self.date)
    }
}
