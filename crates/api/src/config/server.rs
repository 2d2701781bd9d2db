//! Server Config

use clap::Args;
use oracle_app::server::ServeOptions;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Host address
    #[arg(short = 'H', long, env = "ORACLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number
    #[arg(
        short,
        long,
        env = "ORACLE_PORT",
        default_value_t = 5555,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// Enable debug mode
    #[arg(short, long, env = "ORACLE_DEBUG")]
    pub debug: bool,

    /// Enable autoreload
    #[arg(short, long, env = "ORACLE_RELOAD")]
    pub reload: bool,
}

impl ServerRuntimeConfig {
    /// Runtime parameters for the server runner.
    #[must_use]
    pub fn serve_options(&self) -> ServeOptions {
        ServeOptions {
            host: self.host.clone(),
            port: self.port,
            reload: self.reload,
            debug: self.debug,
        }
    }
}
