//! Bot module - Core bot functionality.

pub mod dispatcher;
mod runtime;

pub use dispatcher::{AppState, build_dispatcher, schema};
pub use runtime::run;
