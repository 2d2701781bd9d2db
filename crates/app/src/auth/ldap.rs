//! LDAP authentication state.

use tracing::info;
use url::Url;

use crate::auth::{BindPassword, LdapAuthError};

/// Raw LDAP parameters as resolved from configuration.
#[derive(Debug, Clone, Default)]
pub struct LdapSettings {
    /// LDAP server URL, e.g. `"ldap://directory.example.org"`.
    pub url: Option<String>,

    /// Base DN under which user lookups are scoped.
    pub base_dn: Option<String>,

    /// Service bind username.
    pub bind_user: Option<String>,

    /// Service bind password.
    pub bind_password: Option<BindPassword>,
}

/// Process-wide authentication state.
///
/// Configured exactly once during startup, before the server accepts any
/// connection, and handed by ownership into the request-handling layer.
#[derive(Debug, Clone)]
pub struct LdapAuth {
    url: Option<Url>,
    base_dn: Option<String>,
    bind_user: Option<String>,
    bind_password: Option<BindPassword>,
}

impl LdapAuth {
    /// Configure the authentication state from resolved settings.
    ///
    /// The server URL is validated eagerly when present; absent `url`/`base_dn`
    /// pass through even when a bind user is set, and the directory backend
    /// owns that validation.
    ///
    /// # Errors
    ///
    /// Returns an error when the server URL does not parse or does not use an
    /// `ldap`/`ldaps` scheme. A failure here aborts startup.
    pub fn configure(settings: LdapSettings) -> Result<Self, LdapAuthError> {
        let url = settings
            .url
            .map(|raw| parse_server_url(&raw))
            .transpose()?;

        match &url {
            Some(url) => info!(
                server = %url,
                base_dn = settings.base_dn.as_deref(),
                bind_user = settings.bind_user.as_deref(),
                "LDAP authentication configured"
            ),
            None => info!("no LDAP server configured"),
        }

        Ok(Self {
            url,
            base_dn: settings.base_dn,
            bind_user: settings.bind_user,
            bind_password: settings.bind_password,
        })
    }

    /// Whether an LDAP server backend is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    #[must_use]
    pub fn base_dn(&self) -> Option<&str> {
        self.base_dn.as_deref()
    }

    #[must_use]
    pub fn bind_user(&self) -> Option<&str> {
        self.bind_user.as_deref()
    }

    #[must_use]
    pub fn bind_password(&self) -> Option<&BindPassword> {
        self.bind_password.as_ref()
    }
}

fn parse_server_url(raw: &str) -> Result<Url, LdapAuthError> {
    let url = Url::parse(raw).map_err(LdapAuthError::InvalidUrl)?;

    match url.scheme() {
        "ldap" | "ldaps" => Ok(url),
        scheme => Err(LdapAuthError::UnsupportedScheme {
            scheme: scheme.to_string(),
        }),
    }
}
