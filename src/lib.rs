//! Survey client - Sign up, log in, answer surveys and read their results.
//!
//! The crate follows the same layering as the `domain` crate it builds on:
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **data**: HTTP/storage protocols and the remote use cases
//! - **infra**: reqwest transport, token decorator, on-disk storage
//! - **presentation**: Text views of models and error handling
//! - **services**: Use-case container and the current account
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! survey-client signup --name A --email a@a.com --password 12345 --password-confirmation 12345
//! survey-client surveys
//! survey-client result <survey-id>
//! survey-client answer <survey-id> "<answer>"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod errors;
pub mod infra;
pub mod presentation;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use services::{UseCaseContainer, UseCases};
