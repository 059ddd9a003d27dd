//! Tracing subscriber setup. `RUST_LOG` filters, `LOG_FORMAT` picks the output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    /// Stackdriver / Cloud Logging structured output
    Gcp,
}

impl LogFormat {
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "gcp" => LogFormat::Gcp,
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = LogFormat::from_env_value(&std::env::var("LOG_FORMAT").unwrap_or_default());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Gcp => registry.with(tracing_stackdriver::layer()).init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_list(false),
            )
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_env_value() {
        assert_eq!(LogFormat::from_env_value("GCP"), LogFormat::Gcp);
        assert_eq!(LogFormat::from_env_value("json "), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(""), LogFormat::Pretty);
        assert_eq!(LogFormat::from_env_value("xml"), LogFormat::Pretty);
    }
}
