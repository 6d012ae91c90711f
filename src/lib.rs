//! Dashboard - REST backend for a personal productivity dashboard
//!
//! This library serves the widgets of a single-user dashboard (tasks, habits,
//! schedule, notes, meal planner, workouts, subscriptions, ...). Every widget
//! owns one REST resource backed by a shared in-memory document store.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - HTTP routes, handlers and error mapping
//! * [`entities`] - Typed records and their field schemas
//! * [`repositories`] - Generic CRUD over the document store
//! * [`storage`] - Document store trait and in-memory implementation
//! * [`integrations`] - External collaborators (quotes, weather, stubs)
//! * [`insights`] - Derived figures such as habit streaks
//! * [`config`] - Application configuration management

/// HTTP surface: router, handlers and error responses
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed records for every widget
pub mod entities;

/// Derived calculations over stored records
pub mod insights;

/// External collaborators behind trait seams
pub mod integrations;

/// Logging setup and recent-log buffer
pub mod logger;

/// Repository layer over the document store
pub mod repositories;

/// Request body validation against field schemas
pub mod schema;

/// Server bootstrap
pub mod server;

/// Document storage
pub mod storage;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::Entity;
pub use repositories::{ListFilter, RepoError, Repository};
pub use storage::{DocumentStore, MemoryStore};
