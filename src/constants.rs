//! Constants used throughout the application
//!
//! This module centralizes magic strings, response messages, and default
//! values to improve maintainability and consistency.

// Identity
/// User id injected into every record when the config does not name one
pub const DEFAULT_USER_ID: &str = "default-user";

// Server defaults
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

// Fields owned by the server and stripped from client bodies
pub const FIELD_ID: &str = "id";
pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const SERVER_OWNED_FIELDS: [&str; 3] = [FIELD_ID, FIELD_USER_ID, FIELD_CREATED_AT];

// Error Messages
pub const ERROR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERROR_INTERNAL: &str = "Internal server error";
pub const ERROR_BODY_NOT_OBJECT: &str = "request body must be a JSON object";
pub const ERROR_WEATHER_KEY_MISSING: &str = "Weather API key not configured";
pub const ERROR_WEATHER_FETCH_FAILED: &str = "Failed to fetch weather data";

// Quote of the day fallback
pub const FALLBACK_QUOTE: &str = "The secret of getting ahead is getting started.";
pub const FALLBACK_QUOTE_AUTHOR: &str = "Mark Twain";

// Integration defaults
pub const DEFAULT_QUOTE_URL: &str = "https://zenquotes.io/api/today";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_WEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_WEATHER_UNITS: &str = "metric";
pub const DEFAULT_WEATHER_CITY: &str = "London";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;
/// Upper bound accepted for the upstream HTTP timeout
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 60;

// Theme schedule defaults (24h clock)
pub const DEFAULT_LIGHT_THEME_START_HOUR: u32 = 7;
pub const DEFAULT_DARK_THEME_START_HOUR: u32 = 19;

// Logging
pub const LOG_FILE_NAME: &str = "dashboard.log";
/// Number of recent log lines kept in memory for the debug endpoint
pub const LOG_BUFFER_CAPACITY: usize = 500;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Log Messages
pub const LOG_SERVER_LISTENING: &str = "Dashboard API listening";
pub const LOG_QUOTE_FALLBACK: &str = "Quote upstream unavailable, serving fallback quote";
