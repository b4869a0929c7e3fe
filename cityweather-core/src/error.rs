use thiserror::Error;

/// The two outcomes a lookup can fail with.
///
/// `NotFound` is a normal, expected outcome the provider reports for an
/// unknown city. Every other failure (transport, body read, parse, missing
/// fields) is folded into the single `Fetch` kind, carrying the underlying
/// error chain for the diagnostic log.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("city not found")]
    NotFound,

    #[error("failed to fetch weather data")]
    Fetch(#[source] anyhow::Error),
}
