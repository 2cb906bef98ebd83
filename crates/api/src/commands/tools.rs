//! Tool commands

use serde_json::Value;
use slotguard_core::ToolDefinition;
use slotguard_domain::{Result, SlotGuardError, ToolCall, ToolResponse};
use tracing::debug;

use crate::utils::command_helpers::execute_with_logging;
use crate::AppContext;

/// Tool definitions to advertise to the model, sorted by name.
pub fn list_tools(ctx: &AppContext) -> Vec<ToolDefinition> {
    ctx.pipeline.definitions()
}

/// Dispatch one tool call through the guarded pipeline.
pub async fn invoke_tool(ctx: &AppContext, call: ToolCall) -> Result<ToolResponse> {
    let tool = call.name.clone();
    execute_with_logging(&tool, || ctx.pipeline.invoke(call)).await
}

/// JSON-in, JSON-out variant of [`invoke_tool`] for agent runtimes that
/// exchange raw tool-call objects (`{"id"?, "name", "arguments"}`).
pub async fn invoke_tool_json(ctx: &AppContext, raw_call: Value) -> Result<Value> {
    let call: ToolCall = serde_json::from_value(raw_call)
        .map_err(|e| SlotGuardError::MalformedCall(format!("unreadable tool call: {e}")))?;
    debug!(tool = %call.name, call_id = %call.id, "decoded tool call");

    let response = invoke_tool(ctx, call).await?;
    serde_json::to_value(&response)
        .map_err(|e| SlotGuardError::Internal(format!("serialize tool response: {e}")))
}
