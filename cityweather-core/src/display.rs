/// Stable identifiers for the four output regions a lookup writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    City,
    Temperature,
    Description,
    Humidity,
}

impl Field {
    pub const fn all() -> &'static [Field] {
        &[
            Field::City,
            Field::Temperature,
            Field::Description,
            Field::Humidity,
        ]
    }
}

/// A surface the lookup renders into.
///
/// Regions receive already-formatted strings; `notify` carries the blocking
/// user-facing notices ("City not found!", the generic fetch failure, the
/// empty-input prompt). Implementations must tolerate a field being
/// overwritten on every successful lookup.
pub trait DisplaySurface {
    fn write(&mut self, field: Field, text: &str);

    fn notify(&mut self, message: &str);
}

/// The nullary surface: discards all output.
///
/// Useful for callers that only care about the returned reading.
#[derive(Debug, Default)]
pub struct NullDisplaySurface;

impl DisplaySurface for NullDisplaySurface {
    fn write(&mut self, _field: Field, _text: &str) {}

    fn notify(&mut self, _message: &str) {}
}
