//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Default token validity window (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
///
/// Built once at startup and shared immutably behind an `Arc`. There is
/// no default: the signing secret must come from the environment, and a
/// missing secret is a boot failure, not a fallback.
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub token_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Create config with the default 1 hour token TTL
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Token TTL in whole seconds, as written into the `exp` claim
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_hour() {
        let config = AuthConfig::new("test-secret");
        assert_eq!(config.token_ttl_secs(), 3600);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::new("super-secret-value");
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret-value"));
    }
}
