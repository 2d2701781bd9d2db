//! Startup bootstrap: credential resolution, authentication, server hand-off.

use oracle_app::{
    auth::{CredentialError, CredentialPrompt, LdapAuth, LdapAuthError, resolve_bind_password},
    server::{ServeError, ServerRunner},
};
use thiserror::Error;

use crate::config::ServerConfig;

/// Errors that abort the startup attempt.
#[derive(Debug, Error)]
pub(crate) enum BootstrapError {
    /// The interactive credential acquisition failed.
    #[error("failed to resolve bind credential: {0}")]
    Credential(#[from] CredentialError),

    /// The authentication bootstrap failed.
    #[error("failed to configure LDAP authentication: {0}")]
    Auth(#[from] LdapAuthError),

    /// The server failed to start.
    #[error("server failed to start: {0}")]
    Serve(#[from] ServeError),
}

/// Resolve the bind credential, configure the authentication state, then hand
/// control to the server runner.
///
/// The authentication bootstrap completes strictly before the runner is
/// invoked; any failure aborts the startup attempt with no retry.
///
/// # Errors
///
/// Returns an error when credential acquisition, the authentication
/// bootstrap, or server startup fails.
pub(crate) async fn run(
    config: ServerConfig,
    prompt: &dyn CredentialPrompt,
    runner: &dyn ServerRunner,
) -> Result<(), BootstrapError> {
    let options = config.server.serve_options();

    let bind_password = resolve_bind_password(
        config.ldap.bind_user.as_deref(),
        config.ldap.bind_password.clone(),
        prompt,
    )?;

    let auth = LdapAuth::configure(config.ldap.into_settings(bind_password))?;

    runner.run(auth, options).await?;

    Ok(())
}
