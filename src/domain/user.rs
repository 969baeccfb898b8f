use serde::{Deserialize, Serialize};

use super::catalog::Searchable;
use super::errors::DomainError;

pub type UserId = i64;

pub const ADMIN_ROLE: &str = "Admin";
pub const CUSTOMER_ROLE: &str = "Customer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_name: String,
}

/// The signed-in user's profile, as returned by the login endpoint and the
/// user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|r| r.role_name.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.role_name() == Some(ADMIN_ROLE)
    }
}

impl Searchable for UserProfile {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self
                .phone_number
                .as_deref()
                .is_some_and(|p| p.contains(term))
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub role_name: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(DomainError::InvalidInput("email and password are required".into()));
        }
        if self.password != self.confirm_password {
            return Err(DomainError::InvalidInput("Passwords do not match".into()));
        }
        Ok(())
    }
}

/// Admin create/update payload for a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirm: &str) -> Registration {
        Registration {
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            email: "nimal@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            phone_number: "0771234567".into(),
            role_name: CUSTOMER_ROLE.into(),
        }
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert_eq!(
            registration("secret1", "secret2").validate(),
            Err(DomainError::InvalidInput("Passwords do not match".into()))
        );
        assert!(registration("secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn admin_role_is_detected() {
        let user: UserProfile = serde_json::from_str(
            r#"{"userId": 3, "firstName": "Ama", "lastName": "Silva",
                "email": "ama@example.com", "role": {"roleName": "Admin"}}"#,
        )
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(user.full_name(), "Ama Silva");
    }

    #[test]
    fn missing_role_is_not_admin() {
        let user: UserProfile =
            serde_json::from_str(r#"{"userId": 4, "email": "x@example.com"}"#).unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.role_name(), None);
    }

    #[test]
    fn search_covers_name_email_and_phone() {
        let user = UserProfile {
            user_id: 1,
            first_name: "Kamal".into(),
            last_name: "Fernando".into(),
            email: "kamal@pharmacy.lk".into(),
            phone_number: Some("0719876543".into()),
            role: None,
        };
        assert!(user.matches("KAMAL"));
        assert!(user.matches("fern"));
        assert!(user.matches("pharmacy.lk"));
        assert!(user.matches("98765"));
        assert!(!user.matches("silva"));
    }
}
