//! State

use std::sync::Arc;

use oracle_app::auth::LdapAuth;

/// Shared state handed to request handlers at construction time.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) auth: LdapAuth,
}

impl State {
    #[must_use]
    pub(crate) fn new(auth: LdapAuth) -> Self {
        Self { auth }
    }

    #[must_use]
    pub(crate) fn from_auth(auth: LdapAuth) -> Arc<Self> {
        Arc::new(Self::new(auth))
    }
}
