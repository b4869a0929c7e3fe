use cityweather_core::{DisplaySurface, Field};

/// Renders the four output regions as labeled terminal lines; notices go
/// to stderr so they stay visible when stdout is redirected.
#[derive(Debug)]
pub struct TerminalSurface;

fn label(field: Field) -> &'static str {
    match field {
        Field::City => "City",
        Field::Temperature => "Temperature",
        Field::Description => "Description",
        Field::Humidity => "Humidity",
    }
}

impl DisplaySurface for TerminalSurface {
    fn write(&mut self, field: Field, text: &str) {
        println!("{:<12} {text}", label(field));
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}
