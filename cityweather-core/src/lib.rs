//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - The display surface a lookup renders into
//! - Shared domain models (requests, readings)
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod display;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::Config;
pub use display::{DisplaySurface, Field, NullDisplaySurface};
pub use error::LookupError;
pub use lookup::WeatherLookup;
pub use model::{LookupRequest, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
