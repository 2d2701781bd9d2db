//! Oracle API Server
//!
//! Startup bootstrap for the oracle API: resolves runtime configuration and
//! LDAP bind credentials, configures the process-wide authentication state,
//! then hands control to the web server for the lifetime of the process.

use std::process::ExitCode;

use oracle_app::auth::TerminalPrompt;
use tracing::error;

use crate::{config::ServerConfig, server::SalvoRunner};

mod bootstrap;
mod config;
mod healthcheck;
mod observability;
mod server;
mod shutdown;
mod state;

/// Oracle API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|error| error.exit());

    // Initialize logging
    if let Err(error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln"
        )]
        {
            eprintln!("Observability error: {error}");
        }

        return ExitCode::FAILURE;
    }

    match bootstrap::run(config, &TerminalPrompt, &SalvoRunner).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("startup aborted: {error}");

            ExitCode::FAILURE
        }
    }
}
