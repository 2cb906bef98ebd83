//! Domain types and models

pub mod event;
pub mod removal;
pub mod time;
pub mod tool;
pub mod window;

pub use event::{Event, EventDraft, EventPatch, EventReceipt};
pub use removal::{RemovalOutcome, RemovalStatus};
pub use time::TimeSnapshot;
pub use tool::{ConflictReport, ToolArguments, ToolCall, ToolOutcome, ToolResponse};
pub use window::TimeWindow;
