//! Saved links.

use serde::{Deserialize, Serialize};

use super::{Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// A saved web link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Bookmark {
    const COLLECTION: &'static str = "bookmarks";
    const NAME: &'static str = "Bookmark";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::NonEmptyText),
        FieldSpec::required("url", FieldKind::NonEmptyText),
        FieldSpec::optional("category", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn check(&self) -> Result<(), ValidationError> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ValidationError::single("url", "must start with http:// or https://"));
        }
        Ok(())
    }
}
