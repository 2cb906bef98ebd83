//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use slotguard_domain::{Result as DomainResult, ToolResponse};

use crate::utils::logging::log_tool_execution;

/// Execute a tool command with automatic timing and structured logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, call: ToolCall) -> Result<ToolResponse> {
///     execute_with_logging(&call.name.clone(), || ctx.pipeline.invoke(call)).await
/// }
/// ```
pub async fn execute_with_logging<F, Fut>(tool: &str, command_fn: F) -> DomainResult<ToolResponse>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<ToolResponse>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    log_tool_execution(tool, start.elapsed(), &result);
    result
}
