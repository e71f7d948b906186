use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError,
    fmt,
    layer::{Layer, SubscriberExt},
    prelude::*,
    registry,
    util::TryInitError,
    EnvFilter,
};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Filter Error: {0}")]
    Filter(#[from] ParseError),

    #[error("Init Error: {0}")]
    Init(#[from] TryInitError),
}

#[derive(Debug, derive_new::new)]
pub struct LogOptions {
    #[new(into)]
    filter: Option<String>,
    #[new(value = "true")]
    with_target: bool,
}

impl LogOptions {
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        match &self.filter {
            Some(directives) => Ok(EnvFilter::try_new(directives)?),
            None => Ok(EnvFilter::from_default_env()),
        }
    }
}

/// Installs a global `fmt` subscriber. Without an explicit filter, `RUST_LOG`
/// decides what is printed.
pub fn configure(options: Option<LogOptions>) -> Result<(), LoggingError> {
    let options = options.unwrap_or_else(|| LogOptions::new(None::<String>));
    let filter = options.env_filter()?;

    let log_layer = fmt::layer()
        .with_target(options.with_target)
        .with_filter(filter);

    registry().with(log_layer).try_init()?;

    Ok(())
}
