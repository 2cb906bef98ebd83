use std::time::Duration;

use slotguard_domain::{Result, SlotGuardError, ToolOutcome, ToolResponse};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "SLOTGUARD_LOG_FORMAT";

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`). Set `SLOTGUARD_LOG_FORMAT=json`
/// for one JSON object per line.
///
/// # Errors
/// `SlotGuardError::Internal` if a global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let installed = if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_current_span(true).try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
    };

    installed.map_err(|e| SlotGuardError::Internal(format!("failed to install tracing: {e}")))
}

/// Log the outcome of a tool execution with structured fields.
///
/// Vetoes and failures log at `warn`. `tool` must not carry argument values.
#[inline]
pub fn log_tool_execution(tool: &str, elapsed: Duration, result: &Result<ToolResponse>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(ToolResponse { outcome: ToolOutcome::Completed { .. }, call_id, .. }) => {
            info!(tool, call_id = %call_id, duration_ms, "tool_execution_success");
        }
        Ok(ToolResponse { outcome: ToolOutcome::Conflict(report), call_id, .. }) => {
            warn!(
                tool,
                call_id = %call_id,
                duration_ms,
                conflicts = report.conflicting_events.len(),
                "tool_execution_conflict"
            );
        }
        Err(err) => {
            warn!(tool, duration_ms, error_type = error_label(err), error = %err, "tool_execution_failure");
        }
    }
}

/// Convert a `SlotGuardError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SlotGuardError) -> &'static str {
    error.label()
}
