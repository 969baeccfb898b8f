use async_trait::async_trait;

use crate::domain::ports::Authenticator;
use crate::domain::session::Session;
use crate::domain::user::{Credentials, Registration};
use crate::errors::AppError;

use super::api_client::ApiClient;
use super::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

pub const LOGIN_FAILED_NOTICE: &str = "Login failed. Please check your email and password.";
pub const REGISTRATION_FAILED_NOTICE: &str = "Registration failed";

/// Login and sign-up endpoints. Neither response uses the usual envelope.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for AuthApi {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let builder = self
            .client
            .post("/auth/authentication")
            .json(&LoginRequest::from(credentials));

        let response: LoginResponse = match self.client.send_json(builder).await {
            Ok(r) => r,
            // Bad credentials are not an expired session.
            Err(AppError::Unauthorized | AppError::Forbidden) => return Err(login_failed(401)),
            Err(e) => return Err(e),
        };

        match (response.jwt_token, response.user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(Session::new(token, user)),
            _ => Err(login_failed(200)),
        }
    }

    async fn register(&self, registration: &Registration) -> Result<String, AppError> {
        let builder = self
            .client
            .post("/auth/register")
            .json(&RegisterRequest::from(registration));
        let response: RegisterResponse = self.client.send_json(builder).await?;

        if response.success {
            Ok(response.message.unwrap_or_default())
        } else {
            Err(AppError::Rejected {
                code: 200,
                message: response
                    .message
                    .unwrap_or_else(|| REGISTRATION_FAILED_NOTICE.to_string()),
            })
        }
    }
}

fn login_failed(code: i64) -> AppError {
    AppError::Rejected {
        code,
        message: LOGIN_FAILED_NOTICE.to_string(),
    }
}
