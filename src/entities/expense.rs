//! Expense tracker entries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// A single spending entry in the expense tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    pub date: String,
}

fn default_category() -> String {
    "other".to_string()
}

impl Entity for Expense {
    const COLLECTION: &'static str = "expenses";
    const NAME: &'static str = "Expense";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("description", FieldKind::NonEmptyText),
        FieldSpec::required("amount", FieldKind::Number),
        FieldSpec::defaulted("category", FieldKind::NonEmptyText),
        FieldSpec::required("date", FieldKind::Date),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Date, Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.category)
    }

    /// Newest first
    fn compare(&self, other: &Self) -> Ordering {
        other.date.cmp(&self.date)
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.amount < 0.0 {
            return Err(ValidationError::single("amount", "cannot be negative"));
        }
        Ok(())
    }
}
