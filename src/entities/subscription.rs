//! Recurring subscriptions and their billing cycle.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{cmp_unset_last, default_true, Entity, Filter, RecordMeta};
use crate::schema::{FieldKind, FieldSpec, ValidationError};

/// Accepted `billingCycle` values
pub const BILLING_CYCLES: &[&str] = &["weekly", "monthly", "quarterly", "yearly"];

/// A recurring paid service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    /// Price charged once per billing cycle
    pub cost: f64,
    #[serde(default = "default_billing_cycle")]
    pub billing_cycle: String,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_billing_cycle() -> String {
    "monthly".to_string()
}

impl Entity for Subscription {
    const COLLECTION: &'static str = "subscriptions";
    const NAME: &'static str = "Subscription";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::NonEmptyText),
        FieldSpec::required("cost", FieldKind::Number),
        FieldSpec::defaulted("billingCycle", FieldKind::OneOf(BILLING_CYCLES)),
        FieldSpec::optional("nextBillingDate", FieldKind::Date),
        FieldSpec::optional("category", FieldKind::Text),
        FieldSpec::defaulted("active", FieldKind::Boolean),
    ];
    const FILTERS: &'static [Filter] = &[Filter::Period, Filter::Type];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn kind(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn period(&self) -> Option<&str> {
        Some(&self.billing_cycle)
    }

    fn compare(&self, other: &Self) -> Ordering {
        cmp_unset_last(self.next_billing_date.as_deref(), other.next_billing_date.as_deref())
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.cost < 0.0 {
            return Err(ValidationError::single("cost", "cannot be negative"));
        }
        Ok(())
    }
}
