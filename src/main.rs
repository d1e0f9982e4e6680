//! Survey client - Application entry point
//!
//! CLI-based entry point that dispatches to the survey commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use survey_client::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    services::UseCases,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::from_env().with_overrides(cli.api_url, cli.storage);
    tracing::debug!("Configuration loaded: {:?}", config);

    let container = UseCases::from_config(config);

    // Execute command
    let result = match cli.command {
        Commands::Signup(args) => commands::signup::execute(args, &container).await,
        Commands::Login(args) => commands::login::execute(args, &container).await,
        Commands::Logout => commands::logout::execute(&container),
        Commands::Surveys => commands::surveys::execute(&container).await,
        Commands::Result(args) => commands::survey_result::show(args, &container).await,
        Commands::Answer(args) => commands::survey_result::answer(args, &container).await,
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!("Command failed ({}): {}", e.code(), e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
