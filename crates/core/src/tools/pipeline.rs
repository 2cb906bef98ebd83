//! Interceptor pipeline around tool dispatch
//!
//! A call is looked up, validated against its schema, then passed through
//! every interceptor in registration order before reaching its handler.
//! Any interceptor may answer on its own without calling `next`.

use std::sync::Arc;

use async_trait::async_trait;
use slotguard_domain::{Result, SlotGuardError, ToolCall, ToolOutcome, ToolResponse};
use tracing::{debug, instrument};

use super::registry::{ToolHandler, ToolRegistry};
use super::schema::ToolDefinition;

/// Wraps tool execution. Implementations either delegate to `next.run`
/// or return their own outcome.
#[async_trait]
pub trait ToolInterceptor: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Handle `call`, optionally delegating to the rest of the chain.
    async fn intercept(&self, call: &ToolCall, next: Next<'_>) -> Result<ToolOutcome>;
}

/// Remainder of the chain.
pub struct Next<'a> {
    interceptors: &'a [Arc<dyn ToolInterceptor>],
    handler: &'a dyn ToolHandler,
}

impl<'a> Next<'a> {
    /// Chain that runs `interceptors` in order, then `handler`.
    pub fn new(interceptors: &'a [Arc<dyn ToolInterceptor>], handler: &'a dyn ToolHandler) -> Self {
        Self { interceptors, handler }
    }

    /// Continue with the next interceptor, or the handler once none remain.
    pub async fn run(self, call: &ToolCall) -> Result<ToolOutcome> {
        match self.interceptors.split_first() {
            Some((first, rest)) => {
                first.intercept(call, Next { interceptors: rest, handler: self.handler }).await
            }
            None => self.handler.call(call).await,
        }
    }
}

/// Registry plus the interceptors every call passes through.
pub struct ToolPipeline {
    registry: ToolRegistry,
    interceptors: Vec<Arc<dyn ToolInterceptor>>,
}

impl ToolPipeline {
    /// Pipeline with no interceptors.
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry, interceptors: Vec::new() }
    }

    /// Append an interceptor; earlier ones run first.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Arc<dyn ToolInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Definitions to advertise to the model.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Dispatch one call.
    ///
    /// # Errors
    /// `MalformedCall` for unknown tools or arguments that break the schema;
    /// otherwise whatever the handler returns.
    #[instrument(skip(self, call), fields(tool = %call.name, call_id = %call.id))]
    pub async fn invoke(&self, call: ToolCall) -> Result<ToolResponse> {
        let tool = self
            .registry
            .get(&call.name)
            .ok_or_else(|| SlotGuardError::MalformedCall(format!("unknown tool '{}'", call.name)))?;
        tool.validator.validate(&call.arguments)?;

        debug!(interceptors = self.interceptors.len(), "dispatching tool call");
        let outcome = Next::new(&self.interceptors, tool.handler.as_ref()).run(&call).await?;

        Ok(ToolResponse { call_id: call.id, tool: call.name, outcome })
    }
}
