use tracing::{error, info};

use crate::{
    display::{DisplaySurface, Field},
    error::LookupError,
    model::{LookupRequest, WeatherReading},
    provider::WeatherProvider,
};

/// Owns the request/response/update sequence for one city lookup.
///
/// The provider is injected at construction, the display surface per call.
/// On failure the surface regions keep their prior values; only a notice
/// is raised.
#[derive(Debug)]
pub struct WeatherLookup {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherLookup {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Look up current weather for `city` and render it onto `surface`.
    ///
    /// `city` must already be trimmed and non-empty; the trigger layer
    /// enforces that before invoking. Regions are written only after the
    /// full response has parsed, so there is never a partial update.
    pub async fn run(
        &self,
        city: &str,
        surface: &mut dyn DisplaySurface,
    ) -> Result<WeatherReading, LookupError> {
        let request = LookupRequest {
            city: city.to_owned(),
        };

        match self.provider.current_weather(&request).await {
            Ok(reading) => {
                surface.write(Field::City, &reading.city_name);
                surface.write(Field::Temperature, &format!("{} °C", reading.temperature_c));
                surface.write(Field::Description, &reading.description);
                surface.write(Field::Humidity, &format!("{}%", reading.humidity_pct));

                info!(
                    city = %reading.city_name,
                    temperature_c = reading.temperature_c,
                    description = %reading.description,
                    humidity_pct = reading.humidity_pct,
                    "weather lookup succeeded"
                );

                Ok(reading)
            }
            Err(LookupError::NotFound) => {
                surface.notify("City not found!");
                Err(LookupError::NotFound)
            }
            Err(LookupError::Fetch(source)) => {
                error!(error = ?source, "error fetching weather");
                surface.notify("Failed to fetch weather data.");
                Err(LookupError::Fetch(source))
            }
        }
    }
}
