use std::sync::Once;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TELEMETRY_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "example_api=info,rocket=warn,warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT`; anything other than `json` means human-readable text.
    fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    fn layer<S>(self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        match self {
            LogFormat::Json => fmt::layer().json().boxed(),
            LogFormat::Text => fmt::layer().boxed(),
        }
    }
}

pub fn init() {
    TELEMETRY_INIT.call_once(|| {
        // Rocket logs through `log`; route it into tracing before Rocket installs its own logger.
        if let Err(err) = tracing_log::LogTracer::init() {
            eprintln!("failed to set log tracer: {err}");
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let format = LogFormat::from_setting(std::env::var("LOG_FORMAT").ok().as_deref());

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(format.layer())
            .try_init();
        if let Err(err) = installed {
            eprintln!("failed to initialize tracing subscriber: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_selection() {
        assert_eq!(LogFormat::from_setting(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("pretty")), LogFormat::Text);
        assert_eq!(LogFormat::from_setting(None), LogFormat::Text);
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(TELEMETRY_INIT.is_completed());
    }
}
