//! Commands module - CLI command implementations.
//!
//! Each command returns the text to print, or the error to report.

pub mod login;
pub mod logout;
pub mod signup;
pub mod survey_result;
pub mod surveys;
