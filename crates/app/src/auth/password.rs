//! Bind password secret wrapper.

use std::{convert::Infallible, fmt, str::FromStr};

use zeroize::Zeroize;

/// LDAP bind password.
///
/// Exists only to be carried from configuration resolution into the
/// authentication state. The raw value is zeroed when dropped and is never
/// emitted by `Debug`.
#[derive(Clone)]
pub struct BindPassword {
    raw: String,
}

impl BindPassword {
    #[must_use]
    pub fn new(raw: String) -> Self {
        Self { raw }
    }

    /// Borrow the raw password for handing to the authentication backend.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Debug for BindPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BindPassword(**redacted**)")?;
        Ok(())
    }
}

impl Drop for BindPassword {
    fn drop(&mut self) {
        self.raw.zeroize();
    }
}

impl FromStr for BindPassword {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let password = BindPassword::new("hunter2".to_string());

        let rendered = format!("{password:?}");

        assert!(
            !rendered.contains("hunter2"),
            "debug output must not contain the raw password"
        );
        assert!(rendered.contains("redacted"), "debug output is a fixed marker");
    }

    #[test]
    fn expose_returns_the_raw_value() {
        let password = BindPassword::new("pw123".to_string());

        assert_eq!(password.expose(), "pw123");
        assert!(!password.is_empty());
        assert!(BindPassword::new(String::new()).is_empty());
    }
}
