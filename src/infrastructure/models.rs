use serde::{Deserialize, Serialize};

use crate::domain::page::PageSlice;
use crate::domain::user::{Credentials, Registration, UserProfile};
use crate::errors::AppError;

/// `{code, message, data}` wrapper used by most endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    fn rejection(code: i64, message: Option<String>) -> AppError {
        AppError::Rejected {
            code,
            message: message.unwrap_or_else(|| "Request failed".to_string()),
        }
    }

    pub fn into_data(self) -> Result<T, AppError> {
        if !self.is_success() {
            return Err(Self::rejection(self.code, self.message));
        }
        self.data
            .ok_or_else(|| AppError::Decode("response has no data".to_string()))
    }

    pub fn into_message(self) -> Result<String, AppError> {
        if !self.is_success() {
            return Err(Self::rejection(self.code, self.message));
        }
        Ok(self.message.unwrap_or_default())
    }
}

/// `data` of a paginated listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedData<T> {
    #[serde(default = "Vec::new")]
    pub data_list: Vec<T>,
    #[serde(default)]
    pub data_count: u64,
    /// Reported by the backend but not trusted; the page count is always
    /// recomputed from `data_count`.
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> From<PagedData<T>> for PageSlice<T> {
    fn from(data: PagedData<T>) -> Self {
        PageSlice {
            records: data.data_list,
            total_items: data.data_count,
        }
    }
}

/// Body of non-2xx responses; only the message is used.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub user_email: &'a str,
    pub user_password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(c: &'a Credentials) -> Self {
        Self {
            user_email: &c.email,
            user_password: &c.password,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub phone_number: &'a str,
    pub role_name: &'a str,
}

impl<'a> From<&'a Registration> for RegisterRequest<'a> {
    fn from(r: &'a Registration) -> Self {
        Self {
            first_name: &r.first_name,
            last_name: &r.last_name,
            email: &r.email,
            password: &r.password,
            phone_number: &r.phone_number,
            role_name: &r.role_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_envelope_decodes_and_ignores_reported_pages() {
        let envelope: ApiEnvelope<PagedData<u32>> = serde_json::from_str(
            r#"{"code": 200, "message": "ok",
                "data": {"dataList": [1, 2, 3], "dataCount": 12, "totalPages": 99}}"#,
        )
        .unwrap();
        let slice: PageSlice<u32> = envelope.into_data().unwrap().into();
        assert_eq!(slice.records, vec![1, 2, 3]);
        assert_eq!(slice.total_items, 12);
    }

    #[test]
    fn failure_code_surfaces_message() {
        let envelope: ApiEnvelope<PagedData<u32>> =
            serde_json::from_str(r#"{"code": 400, "message": "Invalid sort field", "data": null}"#)
                .unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err(),
            AppError::Rejected {
                code: 400,
                message: "Invalid sort field".into()
            }
        );
    }

    #[test]
    fn success_without_data_is_a_decode_error() {
        let envelope: ApiEnvelope<u32> = serde_json::from_str(r#"{"code": 200}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(AppError::Decode(_))));
    }

    #[test]
    fn login_request_uses_backend_field_names() {
        let creds = Credentials {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        let json = serde_json::to_value(LoginRequest::from(&creds)).unwrap();
        assert_eq!(json, serde_json::json!({"userEmail": "a@b.c", "userPassword": "pw"}));
    }
}
