//! Process-global request logging settings, set once at startup.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::config::ServerConfig;

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);
static PARENT_PROPAGATION: AtomicBool = AtomicBool::new(false);

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    SLOW_REQUEST_THRESHOLD_MS.store(config.logging.slow_request_threshold_ms, Ordering::Relaxed);

    // Incoming trace context is only useful when spans are exported.
    PARENT_PROPAGATION.store(
        config.tracing.otel_enabled && config.tracing.otel_parent_propagation_enabled,
        Ordering::Relaxed,
    );
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed)
}

pub(super) fn parent_propagation_enabled() -> bool {
    PARENT_PROPAGATION.load(Ordering::Relaxed)
}
