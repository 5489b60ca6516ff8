//! Redacting wrapper for the CDS API key.

use std::fmt;

/// API key that never appears in `Debug` or `Display` output.
///
/// Use [`ApiKey::expose`] only when handing the value to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Short form safe for terminal output: the first four characters
    /// followed by a mask, or only the mask for short keys.
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        if self.0.chars().count() <= 8 {
            "********".to_string()
        } else {
            format!("{prefix}********")
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_hide_value() {
        let key = ApiKey::new("0123456789abcdef");
        assert!(!format!("{key:?}").contains("0123"));
        assert!(!key.to_string().contains("0123"));
    }

    #[test]
    fn expose_returns_value() {
        assert_eq!(ApiKey::new("secret").expose(), "secret");
    }

    #[test]
    fn masked_keeps_prefix_of_long_keys_only() {
        assert_eq!(ApiKey::new("0123456789abcdef").masked(), "0123********");
        assert_eq!(ApiKey::new("short").masked(), "********");
    }
}
