use thiserror::Error;

use crate::domain::errors::DomainError;

pub const CONNECTIVITY_NOTICE: &str =
    "Unable to reach the server. Please check your connection and try again.";
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please login again.";
pub const ACCESS_DENIED_NOTICE: &str =
    "Access denied. You do not have permission to perform this action.";
pub const STORAGE_NOTICE: &str = "Your session could not be saved on this device.";
pub const UNEXPECTED_RESPONSE_NOTICE: &str =
    "The server sent an unexpected response. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    /// Non-success status or envelope code, with the backend's message.
    #[error("Rejected ({code}): {message}")]
    Rejected { code: i64, message: String },

    /// A client-side check failed; nothing was sent.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The local session file could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Message shown to the user.
    pub fn notice(&self) -> String {
        match self {
            AppError::Network(_) => CONNECTIVITY_NOTICE.to_string(),
            AppError::Unauthorized => SESSION_EXPIRED_NOTICE.to_string(),
            AppError::Forbidden => ACCESS_DENIED_NOTICE.to_string(),
            AppError::Rejected { message, .. } | AppError::Precondition(message) => message.clone(),
            AppError::Decode(_) => UNEXPECTED_RESPONSE_NOTICE.to_string(),
            AppError::Storage(_) => STORAGE_NOTICE.to_string(),
        }
    }

    /// Whether the session must be discarded and the user sent to login.
    pub fn requires_login(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyCart => AppError::Precondition(e.to_string()),
            DomainError::InvalidInput(msg) => AppError::Precondition(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_failure_shows_generic_message() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.notice(), CONNECTIVITY_NOTICE);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn rejected_message_is_verbatim() {
        let err = AppError::Rejected {
            code: 400,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.notice(), "Email already registered");
    }

    #[test]
    fn only_unauthorized_requires_login() {
        assert!(AppError::Unauthorized.requires_login());
        assert!(!AppError::Forbidden.requires_login());
        assert_eq!(AppError::Forbidden.notice(), ACCESS_DENIED_NOTICE);
    }

    #[test]
    fn domain_invalid_input_maps_to_precondition() {
        let app_err: AppError = DomainError::InvalidInput("Passwords do not match".to_string()).into();
        assert_eq!(app_err, AppError::Precondition("Passwords do not match".to_string()));
        assert_eq!(app_err.notice(), "Passwords do not match");
    }

    #[test]
    fn domain_empty_cart_maps_to_precondition() {
        let app_err: AppError = DomainError::EmptyCart.into();
        assert_eq!(app_err.notice(), "Your cart is empty");
    }
}
