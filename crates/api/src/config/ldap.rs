//! LDAP Config

use clap::Args;
use oracle_app::auth::{BindPassword, LdapSettings};

/// LDAP directory settings.
#[derive(Debug, Args)]
pub struct LdapConfig {
    /// LDAP server URL
    #[arg(short, long, env = "LDAP_SERVER")]
    pub server: Option<String>,

    /// LDAP base DN to search for users
    #[arg(short, long, env = "LDAP_BASE_DN")]
    pub base_dn: Option<String>,

    /// LDAP bind username
    #[arg(short = 'u', long, env = "LDAP_BIND_USER")]
    pub bind_user: Option<String>,

    /// LDAP bind password; prompted for when a bind user is set without one
    #[arg(short = 'P', long, env = "LDAP_BIND_PASSWORD", hide_env_values = true)]
    pub bind_password: Option<BindPassword>,
}

impl LdapConfig {
    /// Settings for the authentication bootstrap, with the resolved password
    /// replacing whatever was supplied on the command line.
    #[must_use]
    pub fn into_settings(self, bind_password: Option<BindPassword>) -> LdapSettings {
        LdapSettings {
            url: self.server,
            base_dn: self.base_dn,
            bind_user: self.bind_user,
            bind_password,
        }
    }
}
