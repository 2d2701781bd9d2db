//! Server configuration module

use clap::Parser;

use crate::config::{ldap::LdapConfig, logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod ldap;
pub(crate) mod logging;
pub(crate) mod server;

/// Oracle API Server configuration
#[derive(Debug, Parser)]
#[command(name = "oracle-api", about = "Oracle API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// LDAP directory settings.
    #[command(flatten)]
    pub ldap: LdapConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Default log filter; `--debug` forces verbose output.
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        if self.server.debug {
            "debug"
        } else {
            &self.logging.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_the_documented_values() -> TestResult {
        let config = ServerConfig::try_parse_from(["oracle-api"])?;

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5555);
        assert!(!config.server.debug);
        assert!(!config.server.reload);
        assert!(config.ldap.server.is_none());
        assert!(config.ldap.base_dn.is_none());
        assert!(config.ldap.bind_user.is_none());
        assert!(config.ldap.bind_password.is_none());

        Ok(())
    }

    #[test]
    fn short_flags_parse() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "oracle-api",
            "-H",
            "0.0.0.0",
            "-p",
            "8080",
            "-d",
            "-r",
            "-s",
            "ldap://directory.example.org",
            "-b",
            "dc=example,dc=org",
            "-u",
            "svc-oracle",
            "-P",
            "secret",
        ])?;

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.debug);
        assert!(config.server.reload);
        assert_eq!(
            config.ldap.server.as_deref(),
            Some("ldap://directory.example.org")
        );
        assert_eq!(config.ldap.base_dn.as_deref(), Some("dc=example,dc=org"));
        assert_eq!(config.ldap.bind_user.as_deref(), Some("svc-oracle"));
        assert_eq!(
            config.ldap.bind_password.as_ref().map(|p| p.expose()),
            Some("secret")
        );

        Ok(())
    }

    #[test]
    fn port_zero_is_rejected() {
        let result = ServerConfig::try_parse_from(["oracle-api", "--port", "0"]);

        assert!(result.is_err(), "port 0 is outside the documented range");
    }

    #[test]
    fn non_integer_port_is_rejected() {
        let result = ServerConfig::try_parse_from(["oracle-api", "--port", "http"]);

        assert!(result.is_err(), "malformed port must fail at parse time");
    }

    #[test]
    fn debug_flag_forces_the_debug_log_filter() -> TestResult {
        let config = ServerConfig::try_parse_from(["oracle-api", "--debug"])?;

        assert_eq!(config.effective_log_level(), "debug");

        Ok(())
    }
}
