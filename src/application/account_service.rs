use crate::domain::ports::{Authenticator, SessionStore};
use crate::domain::session::Session;
use crate::domain::user::{Credentials, Registration};
use crate::errors::AppError;

use super::session_context::SessionContext;

pub struct AccountService<A> {
    auth: A,
}

impl<A: Authenticator> AccountService<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }

    pub async fn login<'a, S: SessionStore>(
        &self,
        session: &'a mut SessionContext<S>,
        credentials: &Credentials,
    ) -> Result<&'a Session, AppError> {
        let established = self.auth.authenticate(credentials).await?;
        session.establish(established)
    }

    /// Rejects a mismatched password confirmation before anything is sent.
    pub async fn register(&self, registration: &Registration) -> Result<String, AppError> {
        registration.validate()?;
        self.auth.register(registration).await
    }

    pub fn logout<S: SessionStore>(&self, session: &mut SessionContext<S>) {
        session.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::user::{UserProfile, CUSTOMER_ROLE};
    use crate::infrastructure::session_store::MemorySessionStore;

    #[derive(Default)]
    struct FakeAuth {
        registrations: AtomicUsize,
    }

    #[async_trait]
    impl Authenticator for FakeAuth {
        async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AppError> {
            if credentials.password != "correct horse" {
                return Err(AppError::Rejected {
                    code: 401,
                    message: "Login failed. Please check your email and password.".into(),
                });
            }
            Ok(Session::new(
                "jwt",
                UserProfile {
                    user_id: 1,
                    first_name: "Ruwan".into(),
                    last_name: "Kumara".into(),
                    email: credentials.email.clone(),
                    phone_number: None,
                    role: None,
                },
            ))
        }

        async fn register(&self, _registration: &Registration) -> Result<String, AppError> {
            self.registrations.fetch_add(1, Ordering::SeqCst);
            Ok("User registered successfully".into())
        }
    }

    fn registration(confirm: &str) -> Registration {
        Registration {
            first_name: "Ruwan".into(),
            last_name: "Kumara".into(),
            email: "ruwan@example.com".into(),
            password: "pw-123456".into(),
            confirm_password: confirm.into(),
            phone_number: "0770000000".into(),
            role_name: CUSTOMER_ROLE.into(),
        }
    }

    #[tokio::test]
    async fn login_establishes_session() {
        let service = AccountService::new(FakeAuth::default());
        let mut ctx = SessionContext::new(MemorySessionStore::default());
        let creds = Credentials {
            email: "ruwan@example.com".into(),
            password: "correct horse".into(),
        };
        let session = service.login(&mut ctx, &creds).await.unwrap();
        assert_eq!(session.jwt_token, "jwt");
        assert_eq!(ctx.bearer(), Some("jwt"));

        service.logout(&mut ctx);
        assert!(!ctx.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_leaves_session_empty() {
        let service = AccountService::new(FakeAuth::default());
        let mut ctx = SessionContext::new(MemorySessionStore::default());
        let creds = Credentials {
            email: "ruwan@example.com".into(),
            password: "wrong".into(),
        };
        let err = service.login(&mut ctx, &creds).await.unwrap_err();
        assert!(err.notice().starts_with("Login failed"));
        assert!(!ctx.is_authenticated());
    }

    #[tokio::test]
    async fn mismatched_passwords_are_caught_before_sending() {
        let service = AccountService::new(FakeAuth::default());
        let err = service.register(&registration("different")).await.unwrap_err();
        assert_eq!(err, AppError::Precondition("Passwords do not match".into()));
        assert_eq!(service.auth.registrations.load(Ordering::SeqCst), 0);

        let message = service.register(&registration("pw-123456")).await.unwrap();
        assert_eq!(message, "User registered successfully");
        assert_eq!(service.auth.registrations.load(Ordering::SeqCst), 1);
    }
}
