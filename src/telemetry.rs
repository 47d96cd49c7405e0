use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::ObservabilityConfig;
use crate::record_states::{InvocationContext, RecordId, RecordState};

/// Initialize structured logging for the host application.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    tracing::info!("Record state telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking the steps of one transition
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span carrying the attributes of a single transition
pub fn create_transition_span(
    record_id: RecordId,
    target: RecordState,
    context: InvocationContext,
    correlation_id: &str,
) -> tracing::Span {
    tracing::info_span!(
        "record_state_transition",
        record.id = record_id,
        target_state = %target,
        context = ?context,
        correlation.id = correlation_id,
    )
}
