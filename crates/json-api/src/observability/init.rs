//! Tracing subscriber and telemetry lifecycle.

use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::error;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::{ObservabilityError, otel, settings};

/// Noisy transport crates are capped at `warn` unless `RUST_LOG` says otherwise.
const QUIET_DEPENDENCIES: &str = "h2=warn,hyper=warn,tower=warn,tonic=warn,opentelemetry=warn,sqlx=warn";

/// Handle to the telemetry pipelines installed at startup.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    /// Install the global subscriber and, when enabled, the OTLP span exporter.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        let tracer_provider = if config.tracing.otel_enabled {
            global::set_text_map_propagator(TraceContextPropagator::new());

            Some(otel::build_tracer_provider(&config.tracing)?)
        } else {
            None
        };

        match config.logging.log_format {
            LogFormat::Compact => install(
                config,
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
                tracer_provider.as_ref(),
            )?,
            LogFormat::Json => install(
                config,
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true),
                tracer_provider.as_ref(),
            )?,
        }

        Ok(Self { tracer_provider })
    }

    /// Flush buffered spans. Called once the server has stopped.
    pub(crate) fn shutdown(self) {
        let Some(provider) = self.tracer_provider else {
            return;
        };

        if let Err(source) = provider.shutdown() {
            error!("failed to shutdown tracer provider: {source}");
        }
    }
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},{QUIET_DEPENDENCIES}")))
}

fn install<L>(
    config: &ServerConfig,
    fmt_layer: L,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(&config.logging.log_level));

    match tracer_provider {
        Some(provider) => {
            let tracer = provider.tracer(config.tracing.otel_service_name.clone());

            subscriber
                .with(tracing_opentelemetry::layer().with_tracer(tracer))
                .try_init()?;
        }
        None => subscriber.try_init()?,
    }

    Ok(())
}
