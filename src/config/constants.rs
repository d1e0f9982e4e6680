//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// API
// =============================================================================

/// Default survey API base URL (for development)
pub const DEFAULT_API_URL: &str = "http://localhost:5050/api";

pub const SIGNUP_PATH: &str = "/signup";

pub const LOGIN_PATH: &str = "/login";

pub const SURVEYS_PATH: &str = "/surveys";

/// Header carrying the current account's token on protected endpoints
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

// =============================================================================
// Storage
// =============================================================================

/// Default location of the key/value storage file
pub const DEFAULT_STORAGE_PATH: &str = ".survey-client/storage.json";

/// Storage key of the logged-in account
pub const ACCOUNT_STORAGE_KEY: &str = "account";
