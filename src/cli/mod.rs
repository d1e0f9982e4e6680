//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `signup` / `login` / `logout` - Account session
//! - `surveys` - Survey list
//! - `result` / `answer` - Survey result

pub mod args;

pub use args::{Cli, Commands};
