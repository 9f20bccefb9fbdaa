//! Unit tests for auth crate
//! Target: C0 coverage 100%, C1 coverage 80%

mod support {
    use chrono::Utc;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::domain::entity::user::{NewUser, User};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{email::Email, user_id::UserId};
    use crate::error::{AuthError, AuthResult};

    /// In-memory user store mimicking the unique index on email
    #[derive(Clone, Default)]
    pub struct MemoryUserRepository {
        users: Arc<Mutex<Vec<User>>>,
        next_id: Arc<AtomicI64>,
    }

    impl MemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl UserRepository for MemoryUserRepository {
        async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(AuthError::EmailTaken);
            }
            let id = UserId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            let now = Utc::now();
            users.push(User {
                user_id: id,
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                role: user.role,
                created_at: now,
                updated_at: now,
            });
            Ok(id)
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| &u.email == email).cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            let users = self.users.lock().unwrap();
            Ok(users.iter().any(|u| &u.email == email))
        }
    }
}

#[cfg(test)]
mod register_tests {
    use std::sync::Arc;

    use super::support::MemoryUserRepository;
    use crate::application::{RegisterInput, RegisterUseCase};
    use crate::error::AuthError;

    fn use_case() -> RegisterUseCase<MemoryUserRepository> {
        RegisterUseCase::new(Arc::new(MemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let use_case = use_case();

        let first = use_case
            .execute(RegisterInput {
                email: "first@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(first.user_id.as_i64(), 1);

        let second = use_case
            .execute(RegisterInput {
                email: "second@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(second.user_id.as_i64(), 2);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let use_case = use_case();

        use_case
            .execute(RegisterInput {
                email: "taken@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        let err = use_case
            .execute(RegisterInput {
                email: "taken@example.com".to_string(),
                password: "different-password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let use_case = use_case();

        let err = use_case
            .execute(RegisterInput {
                email: String::new(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));

        let err = use_case
            .execute(RegisterInput {
                email: "user@example.com".to_string(),
                password: "   ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_register_malformed_email() {
        let use_case = use_case();

        let err = use_case
            .execute(RegisterInput {
                email: "not-an-email".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_register_accepts_short_password() {
        // No minimum length is enforced
        let use_case = use_case();

        let output = use_case
            .execute(RegisterInput {
                email: "short@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_id.as_i64(), 1);
    }
}

#[cfg(test)]
mod login_tests {
    use std::sync::Arc;

    use super::support::MemoryUserRepository;
    use crate::application::config::AuthConfig;
    use crate::application::{
        LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, verify_token,
    };
    use crate::domain::value_object::user_role::UserRole;
    use crate::error::AuthError;

    fn setup() -> (
        RegisterUseCase<MemoryUserRepository>,
        LoginUseCase<MemoryUserRepository>,
        Arc<AuthConfig>,
    ) {
        let repo = Arc::new(MemoryUserRepository::new());
        let config = Arc::new(AuthConfig::new("test-secret"));
        (
            RegisterUseCase::new(repo.clone()),
            LoginUseCase::new(repo, config.clone()),
            config,
        )
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let (register, login, config) = setup();

        register
            .execute(RegisterInput {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        let output = login
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.email.as_str(), "alice@example.com");
        assert_eq!(output.role, UserRole::User);

        let claims = verify_token(&output.token, &config).unwrap();
        assert_eq!(claims.user_id().unwrap(), output.user_id);
        assert_eq!(claims.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (register, login, _config) = setup();

        register
            .execute(RegisterInput {
                email: "bob@example.com".to_string(),
                password: "right-password".to_string(),
            })
            .await
            .unwrap();

        let err = login
            .execute(LoginInput {
                email: "bob@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_failures_share_one_message() {
        // Unknown email and wrong password must be indistinguishable
        let (register, login, _config) = setup();

        register
            .execute(RegisterInput {
                email: "carol@example.com".to_string(),
                password: "right-password".to_string(),
            })
            .await
            .unwrap();

        let unknown_email = login
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "right-password".to_string(),
            })
            .await
            .unwrap_err();

        let wrong_password = login
            .execute(LoginInput {
                email: "carol@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
        assert_eq!(unknown_email.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let (_register, login, _config) = setup();

        let err = login
            .execute(LoginInput {
                email: "user@example.com".to_string(),
                password: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_login_email_is_case_sensitive() {
        // Stored emails are compared byte for byte
        let (register, login, _config) = setup();

        register
            .execute(RegisterInput {
                email: "Dave@Example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        let err = login
            .execute(LoginInput {
                email: "dave@example.com".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}

#[cfg(test)]
mod models_tests {
    use crate::domain::value_object::user_role::UserRole;
    use crate::presentation::dto::{
        LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserDto,
    };

    #[test]
    fn test_register_response_uses_camel_case() {
        let response = RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: 42,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"userId\":42"));
        assert!(!json.contains("user_id"));
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            token: "abc.def.ghi".to_string(),
            user: UserDto {
                id: 7,
                email: "user@example.com".to_string(),
                role: UserRole::User,
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user"]["id"], 7);
        assert_eq!(json["user"]["email"], "user@example.com");
        assert_eq!(json["user"]["role"], "user");
    }

    #[test]
    fn test_request_fields_default_to_empty() {
        // Absent fields become empty strings and fail as missing input
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");

        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"user@example.com"}"#).unwrap();
        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.password, "");
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::AuthError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingCredentials, StatusCode::BAD_REQUEST),
            (
                AuthError::InvalidEmail("Invalid email format".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::InvalidPassword("Password cannot be empty".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::TokenMissing, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (
                AuthError::Database(sqlx::Error::RowNotFound),
                StatusCode::NOT_FOUND,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            AuthError::EmailTaken.to_string(),
            "Email is already registered"
        );
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Email and password are required"
        );
        assert!(AuthError::TokenExpired.to_string().contains("expired"));
    }
}
