//! Tool definitions and argument-bag validation.
//!
//! Parameter schemas are JSON Schema (draft 2020-12), compiled once when a
//! tool is registered.

use std::fmt;
use std::sync::Arc;

use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use slotguard_domain::{Result, SlotGuardError, ToolArguments};

/// Name, description and parameter schema advertised to the agent loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDefinition {
    /// Definition with `parameters` as its JSON Schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self { name: name.into(), description: description.into(), parameters }
    }

    /// Compile the parameter schema.
    ///
    /// # Errors
    /// `SlotGuardError::Config` when `parameters` is not a valid schema.
    pub fn compile(&self) -> Result<ArgumentValidator> {
        let compiled = jsonschema::draft202012::new(&self.parameters).map_err(|e| {
            SlotGuardError::Config(format!("tool '{}' has an invalid parameter schema: {e}", self.name))
        })?;
        Ok(ArgumentValidator { tool: self.name.clone(), compiled: Arc::new(compiled) })
    }
}

/// Compiled parameter schema of one tool.
#[derive(Clone)]
pub struct ArgumentValidator {
    tool: String,
    compiled: Arc<Validator>,
}

impl ArgumentValidator {
    /// Check `arguments` against the compiled schema.
    ///
    /// # Errors
    /// `SlotGuardError::MalformedCall` listing every violation.
    pub fn validate(&self, arguments: &ToolArguments) -> Result<()> {
        let instance = Value::Object(arguments.clone());
        let violations: Vec<String> =
            self.compiled.iter_errors(&instance).map(|error| error.to_string()).collect();

        if violations.is_empty() {
            return Ok(());
        }
        Err(SlotGuardError::MalformedCall(format!("{}: {}", self.tool, violations.join("; "))))
    }
}

impl fmt::Debug for ArgumentValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentValidator").field("tool", &self.tool).finish_non_exhaustive()
    }
}
