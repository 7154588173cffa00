use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::ObservabilityConfig;

/// Initialize tracing for the state engine. JSON output is used when the
/// host application wants machine-readable logs; plain formatting otherwise.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.clone()));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .with(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init telemetry: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to init telemetry: {e}"))?;
    }

    tracing::info!("backoffice state engine telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking related dispatches
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span with common dispatch attributes
pub fn dispatch_span(resource: &str, action: &str, correlation_id: Option<&str>) -> tracing::Span {
    tracing::info_span!(
        "resource_dispatch",
        resource = resource,
        action = action,
        correlation.id = correlation_id,
    )
}
