//! Interactive bind-credential acquisition.

use std::io;

use mockall::automock;

use crate::auth::{BindPassword, CredentialError};

/// Source of an interactively entered bind password.
#[automock]
pub trait CredentialPrompt: Send + Sync {
    /// Read a password for `bind_user` from the operator.
    ///
    /// Implementations must not echo the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream is closed or unreadable.
    fn read_password(&self, bind_user: &str) -> io::Result<String>;
}

/// Terminal prompt backed by `rpassword` (no echo, nothing retained).
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl CredentialPrompt for TerminalPrompt {
    fn read_password(&self, bind_user: &str) -> io::Result<String> {
        rpassword::prompt_password(format!("Enter password for {bind_user}: "))
    }
}

/// Resolve the bind password for the authentication bootstrap.
///
/// The supplied value wins when it is non-empty. When a bind user is set and
/// no usable password was supplied, the operator is prompted exactly once and
/// the entered value is used as-is (an empty entry is accepted). With no bind
/// user the supplied value passes through untouched.
///
/// # Errors
///
/// Returns an error when the prompt fails; the bootstrap must not proceed
/// without a password in the user-without-password case.
pub fn resolve_bind_password(
    bind_user: Option<&str>,
    supplied: Option<BindPassword>,
    prompt: &dyn CredentialPrompt,
) -> Result<Option<BindPassword>, CredentialError> {
    if supplied.as_ref().is_some_and(|password| !password.is_empty()) {
        return Ok(supplied);
    }

    let Some(bind_user) = bind_user.filter(|user| !user.is_empty()) else {
        return Ok(supplied);
    };

    let entered = prompt
        .read_password(bind_user)
        .map_err(CredentialError::Prompt)?;

    Ok(Some(BindPassword::new(entered)))
}
