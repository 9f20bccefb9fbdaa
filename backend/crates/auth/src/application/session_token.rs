//! Session Tokens
//!
//! Stateless HS256 signed tokens. The token is the whole session: no
//! server-side session row exists, so nothing is revoked before expiry.
//!
//! Verification runs with zero leeway. A token is good strictly until
//! its `exp` second and not one second longer.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Claims carried in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified
    pub sub: String,
    /// Role at issue time
    pub role: UserRole,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a typed user id
    ///
    /// A non-numeric subject means the token was not issued by us,
    /// whatever its signature says.
    pub fn user_id(&self) -> AuthResult<UserId> {
        self.sub
            .parse::<i64>()
            .map(UserId::from_i64)
            .map_err(|_| AuthError::TokenInvalid)
    }
}

/// Issue a signed session token for a user
pub fn issue_token(user_id: UserId, role: UserRole, config: &AuthConfig) -> AuthResult<String> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.as_i64().to_string(),
        role,
        iat,
        exp: iat + config.token_ttl_secs(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.token_secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
}

/// Verify a session token and return its claims
///
/// Expired tokens and invalid tokens are reported separately so the
/// middleware can tell clients which one they presented.
pub fn verify_token(token: &str, config: &AuthConfig) -> AuthResult<Claims> {
    // Default leeway is 60s; set to 0 so expiry is exact
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.token_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::new("test-secret")
    }

    /// Encode claims directly, bypassing issue_token, to control timestamps
    fn encode_claims(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let config = test_config();
        let token = issue_token(UserId::from_i64(42), UserRole::User, &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), UserId::from_i64(42));
        assert_eq!(claims.role, UserRole::User);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let config = test_config();
        let token = issue_token(UserId::from_i64(1), UserRole::User, &config).unwrap();

        let other = AuthConfig::new("other-secret");
        let err = verify_token(&token, &other).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let config = test_config();
        let token = issue_token(UserId::from_i64(1), UserRole::User, &config).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        let err = verify_token(&tampered, &config).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let config = test_config();
        let err = verify_token("not-a-token", &config).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_token_valid_before_expiry() {
        // Issued 59 minutes ago, still within the 1 hour window
        let config = test_config();
        let iat = Utc::now().timestamp() - 59 * 60;
        let claims = Claims {
            sub: "7".to_string(),
            role: UserRole::User,
            iat,
            exp: iat + 3600,
        };
        let token = encode_claims(&claims, &config.token_secret);

        assert!(verify_token(&token, &config).is_ok());
    }

    #[test]
    fn test_token_expired_after_window() {
        // Issued 61 minutes ago, one minute past expiry. With the
        // default 60s leeway this would still pass, so this test also
        // pins the zero-leeway behavior.
        let config = test_config();
        let iat = Utc::now().timestamp() - 61 * 60;
        let claims = Claims {
            sub: "7".to_string(),
            role: UserRole::User,
            iat,
            exp: iat + 3600,
        };
        let token = encode_claims(&claims, &config.token_secret);

        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn test_non_numeric_subject_is_invalid() {
        let config = test_config();
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: "abc".to_string(),
            role: UserRole::User,
            iat,
            exp: iat + 3600,
        };
        let token = encode_claims(&claims, &config.token_secret);

        let claims = verify_token(&token, &config).unwrap();
        let err = claims.user_id().unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }
}
