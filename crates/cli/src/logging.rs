//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, Settings};

pub(crate) fn init(settings: &Settings) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone()));

    match settings.log_format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .with(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .with(filter)
            .try_init(),
    }
}
