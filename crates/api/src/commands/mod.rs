//! Commands - agent loop to backend bridge

mod checkpoints;
mod tools;

pub use checkpoints::*;
pub use tools::*;
