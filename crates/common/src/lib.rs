//! Shared pieces used by every crate in the workspace: tracing setup and the
//! small transport types that are not tied to the data model.

pub mod types;
pub mod utils;
