use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::LookupError,
    model::{LookupRequest, WeatherReading},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")
            .map_err(LookupError::Fetch)?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")
            .map_err(LookupError::Fetch)?;

        // OpenWeather reports an unknown city inside the body, as the JSON
        // string "404". Checked before anything else so a not-found body
        // never reaches the reading parser. The comparison is against the
        // string form only; other codes fall through to ordinary handling.
        if let Ok(envelope) = serde_json::from_str::<OwEnvelope>(&body) {
            if envelope.cod.as_ref().and_then(serde_json::Value::as_str) == Some("404") {
                return Err(LookupError::NotFound);
            }
        }

        if !status.is_success() {
            return Err(LookupError::Fetch(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .context("Failed to parse OpenWeather current JSON")
            .map_err(LookupError::Fetch)?;

        let description = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| {
                LookupError::Fetch(anyhow!("OpenWeather response contained no weather entries"))
            })?;

        Ok(WeatherReading {
            city_name: parsed.name,
            temperature_c: parsed.main.temp,
            description,
            humidity_pct: parsed.main.humidity,
        })
    }
}

/// Just the status code carried in the body. It is a number on success
/// responses and a string on error responses.
#[derive(Debug, Deserialize)]
struct OwEnvelope {
    #[serde(default)]
    cod: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &LookupRequest,
    ) -> Result<WeatherReading, LookupError> {
        self.fetch_current(&request.city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
