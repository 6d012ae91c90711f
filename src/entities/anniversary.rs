//! Birthdays, weddings and other yearly dates.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec};
use crate::utils::datetime::month_day_key;

/// Accepted `category` values
pub const CATEGORIES: &[&str] = &["birthday", "wedding", "work", "other"];

/// A yearly date worth remembering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anniversary {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    /// Original date; the year is used to count the years celebrated
    pub date: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_category() -> String {
    "other".to_string()
}

impl Entity for Anniversary {
    const COLLECTION: &'static str = "anniversaries";
    const NAME: &'static str = "Anniversary";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::defaulted("category", FieldKind::OneOf(CATEGORIES)),
        FieldSpec::optional("notes", FieldKind::Text),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.category)
    }

    /// Calendar order within the year
    fn compare(&self, other: &Self) -> Ordering {
        month_day_key(&self.date).cmp(month_day_key(&other.date))
    }
}
