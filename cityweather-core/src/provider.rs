use crate::{
    Config, LookupError, LookupRequest, WeatherReading,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        request: &LookupRequest,
    ) -> Result<WeatherReading, LookupError>;
}

/// Construct the OpenWeatherMap provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityweather configure` and enter your OpenWeatherMap API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
