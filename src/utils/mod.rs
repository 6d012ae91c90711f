//! Utility modules for the dashboard backend.
//!
//! These helpers are shared by the schema validation, list filters and the
//! insight calculations so every layer agrees on how dates and times are
//! written on the wire.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time parsing, formatting and calendar arithmetic

pub mod datetime;
