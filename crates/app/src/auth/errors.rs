//! Authentication bootstrap errors.

use std::io;

use thiserror::Error;

/// Errors raised while acquiring the bind credential.
///
/// Never carries the password value itself.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The interactive prompt failed or its input stream was closed.
    #[error("failed to read bind password from the terminal")]
    Prompt(#[source] io::Error),
}

/// Errors raised while configuring the LDAP authentication state.
#[derive(Debug, Error)]
pub enum LdapAuthError {
    /// The LDAP server URL did not parse.
    #[error("invalid LDAP server URL")]
    InvalidUrl(#[source] url::ParseError),

    /// The LDAP server URL used a scheme other than `ldap`/`ldaps`.
    #[error("unsupported LDAP server URL scheme `{scheme}`")]
    UnsupportedScheme { scheme: String },
}
