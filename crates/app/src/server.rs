//! Server runner seam.

use std::io;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::auth::LdapAuth;

/// Runtime parameters handed to the server runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    /// Network bind address.
    pub host: String,

    /// Network bind port.
    pub port: u16,

    /// Restart-on-change development mode.
    pub reload: bool,

    /// Verbose/error-detail mode.
    pub debug: bool,
}

impl ServeOptions {
    /// Socket address string for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Errors raised by a server runner while starting up.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listener could not be bound (e.g. port already in use).
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
}

/// Terminal control-transfer into the web server.
///
/// `run` blocks for the lifetime of the service; its result becomes the
/// process exit status. Implementations receive the configured authentication
/// state by ownership and hand it to the request-handling layer.
#[automock]
#[async_trait]
pub trait ServerRunner: Send + Sync {
    /// Bind a listener and serve the application until process termination.
    ///
    /// # Errors
    ///
    /// Returns an error on unrecoverable startup failure; never retries.
    async fn run(&self, auth: LdapAuth, options: ServeOptions) -> Result<(), ServeError>;
}
