//! External collaborators behind trait seams.
//!
//! Each outside service the dashboard talks to, or pretends to talk to, is
//! a trait here. Real HTTP implementations exist for quotes and weather; the
//! brainstorm assistant and calendar sync have stub implementations that a
//! real integration can replace without touching the handlers.

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::IntegrationsConfig;
use crate::constants::{FALLBACK_QUOTE, FALLBACK_QUOTE_AUTHOR, LOG_QUOTE_FALLBACK};

/// HTTP quote-of-the-day provider
pub mod quote;

/// Stub collaborators and the clock-based theme schedule
pub mod stub;

/// HTTP weather provider
pub mod weather;

pub use quote::HttpQuoteProvider;
pub use stub::{ClockThemeScheduler, StubBrainstormAssistant, StubCalendarSync};
pub use weather::HttpWeatherProvider;

/// Quote of the day as served to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    /// Quote served when the upstream cannot be reached
    pub fn fallback() -> Self {
        Self {
            quote: FALLBACK_QUOTE.to_string(),
            author: FALLBACK_QUOTE_AUTHOR.to_string(),
        }
    }
}

/// Location to report weather for
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Current conditions at one location, in the configured unit system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub description: String,
    pub icon: Option<String>,
    pub wind_speed: f64,
    pub units: String,
}

/// One brainstorming prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub title: String,
    pub prompt: String,
}

/// Outcome of a calendar sync run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSyncReport {
    pub provider: String,
    pub connected: bool,
    pub imported_events: usize,
    pub synced_at: Option<DateTime<Utc>>,
    pub message: String,
}

/// UI color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Error types specific to external collaborators
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    #[error("{0} not configured")]
    NotConfigured(String),

    #[error("{service} request failed: {message}")]
    Upstream { service: String, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntegrationError {
    pub(crate) fn upstream(service: &str, error: impl std::fmt::Display) -> Self {
        Self::Upstream {
            service: service.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    async fn fetch_quote(&self) -> Result<Quote, IntegrationError>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, IntegrationError>;
}

#[async_trait]
pub trait BrainstormAssistant: Send + Sync {
    fn name(&self) -> &str;

    async fn brainstorm(&self, topic: &str, count: usize) -> Result<Vec<Idea>, IntegrationError>;
}

#[async_trait]
pub trait CalendarSync: Send + Sync {
    fn name(&self) -> &str;

    /// Pull events from the connected calendar provider
    async fn sync(&self) -> Result<CalendarSyncReport, IntegrationError>;
}

/// Picks the UI theme for a time of day
pub trait ThemeScheduler: Send + Sync {
    fn theme_at(&self, time: NaiveTime) -> Theme;
}

/// Every collaborator the API layer uses, assembled once at startup
#[derive(Clone)]
pub struct Integrations {
    pub quotes: Arc<dyn QuoteProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    pub brainstorm: Arc<dyn BrainstormAssistant>,
    pub calendar: Arc<dyn CalendarSync>,
    pub theme: Arc<dyn ThemeScheduler>,
}

impl Integrations {
    /// Real HTTP providers for quotes and weather, stubs for the rest
    pub fn from_config(config: &IntegrationsConfig) -> anyhow::Result<Self> {
        Ok(Self {
            quotes: Arc::new(HttpQuoteProvider::new(&config.quote)?),
            weather: Arc::new(HttpWeatherProvider::new(&config.weather)?),
            brainstorm: Arc::new(StubBrainstormAssistant),
            calendar: Arc::new(StubCalendarSync),
            theme: Arc::new(ClockThemeScheduler::new(&config.theme)),
        })
    }

    /// Quote from the provider, or the fallback quote if it fails
    pub async fn quote_of_the_day(&self) -> Quote {
        match self.quotes.fetch_quote().await {
            Ok(quote) => quote,
            Err(e) => {
                warn!("{} ({}): {}", LOG_QUOTE_FALLBACK, self.quotes.name(), e);
                Quote::fallback()
            }
        }
    }
}
