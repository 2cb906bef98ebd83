//! Tool registry: name -> (definition, handler)

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use slotguard_domain::{Result, SlotGuardError, ToolCall, ToolOutcome};

use super::arguments::{
    parse_arguments, CreateEventArgs, GetEventsArgs, GetTimeArgs, RemoveEventArgs,
    UpdateEventArgs,
};
use super::calendar::CalendarTools;
use super::catalog::CalendarTool;
use super::schema::{ArgumentValidator, ToolDefinition};

/// Executes one validated tool call.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, call: &ToolCall) -> Result<ToolOutcome>;
}

/// A tool's definition, compiled argument schema and handler.
#[derive(Clone)]
pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub validator: ArgumentValidator,
    pub handler: Arc<dyn ToolHandler>,
}

/// Registered tools, iterated in name order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, RegisteredTool>,
}

impl ToolRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the five calendar tools backed by `tools`.
    ///
    /// # Errors
    /// Only if a built-in schema fails to compile.
    pub fn calendar(tools: Arc<CalendarTools>) -> Result<Self> {
        let timezone = tools.timezone().name().to_string();
        let mut registry = Self::new();
        for kind in CalendarTool::ALL {
            registry.register(
                kind.definition(&timezone),
                Arc::new(CalendarToolHandler { tools: Arc::clone(&tools), kind }),
            )?;
        }
        Ok(registry)
    }

    /// Add a tool, compiling its parameter schema.
    ///
    /// # Errors
    /// `SlotGuardError::Config` if a tool with the same name already exists
    /// or the schema does not compile.
    pub fn register(
        &mut self,
        definition: ToolDefinition,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<()> {
        if self.tools.contains_key(&definition.name) {
            return Err(SlotGuardError::Config(format!(
                "tool '{}' is already registered",
                definition.name
            )));
        }
        let validator = definition.compile()?;
        self.tools.insert(definition.name.clone(), RegisteredTool { definition, validator, handler });
        Ok(())
    }

    /// Tool registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    /// Definitions of every tool, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition.clone()).collect()
    }

    /// Registered names in order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Adapts a [`CalendarTools`] operation to the handler interface.
struct CalendarToolHandler {
    tools: Arc<CalendarTools>,
    kind: CalendarTool,
}

#[async_trait]
impl ToolHandler for CalendarToolHandler {
    async fn call(&self, call: &ToolCall) -> Result<ToolOutcome> {
        match self.kind {
            CalendarTool::GetTime => {
                let args: GetTimeArgs = parse_arguments(call)?;
                ToolOutcome::completed(&self.tools.get_time(args.days))
            }
            CalendarTool::GetEvents => {
                let args: GetEventsArgs = parse_arguments(call)?;
                let events = self.tools.get_events(&args.start_time, &args.end_time).await?;
                ToolOutcome::completed(&events)
            }
            CalendarTool::CreateEvent => {
                let args: CreateEventArgs = parse_arguments(call)?;
                ToolOutcome::completed(&self.tools.create_event(args).await?)
            }
            CalendarTool::UpdateEvent => {
                let args: UpdateEventArgs = parse_arguments(call)?;
                ToolOutcome::completed(&self.tools.update_event(args).await?)
            }
            CalendarTool::RemoveEvent => {
                let args: RemoveEventArgs = parse_arguments(call)?;
                ToolOutcome::completed(&self.tools.remove_event(&args.event_id).await)
            }
        }
    }
}
