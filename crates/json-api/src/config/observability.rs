//! Logging & Tracing Config

use clap::{Args, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// One JSON object per event, with the current span list attached.
    Json,
}

/// Logging and request log settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. `info`, `stockroom_json=debug`)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

/// OpenTelemetry trace export settings. Export is off unless enabled.
#[derive(Debug, Args)]
pub struct TracingConfig {
    /// Export spans over OTLP
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false)]
    pub otel_enabled: bool,

    /// Continue traces from incoming `traceparent` headers
    #[arg(long, env = "OTEL_PARENT_PROPAGATION_ENABLED", default_value_t = false)]
    pub otel_parent_propagation_enabled: bool,

    /// OTLP gRPC endpoint
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub otel_exporter_otlp_endpoint: String,

    /// OTLP export timeout in seconds
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3_u64)]
    pub otel_exporter_otlp_timeout_seconds: u64,

    /// `service.name` resource attribute
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "stockroom-json")]
    pub otel_service_name: String,

    /// `service.version` resource attribute
    #[arg(long, env = "OTEL_SERVICE_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub otel_service_version: String,

    /// `deployment.environment.name` resource attribute
    #[arg(long, env = "OTEL_DEPLOYMENT_ENVIRONMENT", default_value = "development")]
    pub otel_deployment_environment: String,

    /// Fraction of root traces sampled, clamped to [0.0, 1.0]
    #[arg(long, env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0_f64)]
    pub otel_trace_sample_ratio: f64,
}
