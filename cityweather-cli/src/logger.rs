use anyhow::Result;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

pub fn init(debug: bool) -> Result<()> {
    let level = if debug {
        LevelFilter::DEBUG.into()
    } else {
        LevelFilter::INFO.into()
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level)
                .from_env()?,
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(debug)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
