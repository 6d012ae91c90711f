//! Current weather over HTTP (OpenWeatherMap response shape).

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{IntegrationError, WeatherProvider, WeatherQuery, WeatherReport};
use crate::config::WeatherConfig;
use crate::constants::ERROR_WEATHER_KEY_MISSING;

const SERVICE: &str = "weather";

#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    wind: Option<OwmWind>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// [`WeatherProvider`] backed by an OpenWeatherMap-compatible HTTP API
pub struct HttpWeatherProvider {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl HttpWeatherProvider {
    /// Build the provider with an HTTP client using the configured timeout
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Query parameters locating the request, falling back to the default city
    fn location_params(&self, query: &WeatherQuery) -> Result<Vec<(&'static str, String)>, IntegrationError> {
        match (query.lat, query.lon) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    return Err(IntegrationError::InvalidRequest(
                        "lat must be within ±90 and lon within ±180".to_string(),
                    ));
                }
                Ok(vec![("lat", lat.to_string()), ("lon", lon.to_string())])
            }
            (None, None) => {
                let city = query
                    .city
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .unwrap_or(self.config.default_city.as_str());
                Ok(vec![("q", city.to_string())])
            }
            _ => Err(IntegrationError::InvalidRequest(
                "lat and lon must be given together".to_string(),
            )),
        }
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    fn name(&self) -> &str {
        &self.config.url
    }

    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, IntegrationError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| IntegrationError::NotConfigured(ERROR_WEATHER_KEY_MISSING.to_string()))?;

        let mut params = self.location_params(query)?;
        params.push(("units", self.config.units.clone()));
        params.push(("appid", api_key));

        let response = self
            .client
            .get(&self.config.url)
            .query(&params)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| IntegrationError::upstream(SERVICE, e.without_url()))?;

        let body: OwmResponse = response
            .json()
            .await
            .map_err(|e| IntegrationError::upstream(SERVICE, e.without_url()))?;

        let condition = body.weather.into_iter().next();
        Ok(WeatherReport {
            location: body.name,
            temperature: body.main.temp,
            feels_like: body.main.feels_like,
            humidity: body.main.humidity,
            description: condition
                .as_ref()
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition.and_then(|c| c.icon),
            wind_speed: body.wind.map(|w| w.speed).unwrap_or_default(),
            units: self.config.units.clone(),
        })
    }
}
