//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Survey client - Sign up, answer surveys and see their results
#[derive(Parser, Debug)]
#[command(name = "survey-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Survey API base URL
    #[arg(long, global = true, env = "API_URL")]
    pub api_url: Option<String>,

    /// Storage file path
    #[arg(long, global = true, env = "STORAGE_PATH")]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in with it
    Signup(SignupArgs),

    /// Log in with an existing account
    Login(LoginArgs),

    /// Forget the stored account
    Logout,

    /// List surveys
    Surveys,

    /// Show the result of a survey
    Result(ResultArgs),

    /// Answer a survey and show the updated result
    Answer(AnswerArgs),
}

#[derive(Parser, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub password_confirmation: String,
}

#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Parser, Debug)]
pub struct ResultArgs {
    /// Survey identifier, as shown by `surveys`
    pub survey_id: String,
}

#[derive(Parser, Debug)]
pub struct AnswerArgs {
    pub survey_id: String,

    /// Answer text, exactly as listed in the result
    pub answer: String,
}
