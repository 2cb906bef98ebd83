//! Calendar tools exposed to the agent loop
//!
//! - `catalog` / `schema`: names, descriptions and argument schemas
//! - `calendar`: the five operations over a [`CalendarProvider`]
//! - `registry` / `pipeline`: dispatch with an interceptor chain
//! - `guard`: the overlap veto on write tools

pub mod arguments;
pub mod calendar;
pub mod catalog;
pub mod guard;
pub mod pipeline;
pub mod registry;
pub mod schema;

use std::sync::Arc;

use chrono_tz::Tz;
use slotguard_domain::Result;

pub use calendar::CalendarTools;
pub use catalog::CalendarTool;
pub use guard::ConflictGuard;
pub use pipeline::{Next, ToolInterceptor, ToolPipeline};
pub use registry::{RegisteredTool, ToolHandler, ToolRegistry};
pub use schema::{ArgumentValidator, ToolDefinition};

use crate::calendar_ports::CalendarProvider;
use crate::clock::Clock;

/// The standard wiring: five calendar tools behind a conflict guard that
/// watches `guarded_tools`.
///
/// # Errors
/// Propagates registry construction failures.
pub fn calendar_pipeline(
    provider: Arc<dyn CalendarProvider>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
    guarded_tools: &[String],
) -> Result<ToolPipeline> {
    let tools = Arc::new(CalendarTools::new(Arc::clone(&provider), clock, timezone));
    let guard = ConflictGuard::new(provider, timezone).with_guarded_tools(guarded_tools.iter().cloned());

    Ok(ToolPipeline::new(ToolRegistry::calendar(tools)?).with_interceptor(Arc::new(guard)))
}
