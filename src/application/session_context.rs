use crate::domain::ports::SessionStore;
use crate::domain::session::Session;
use crate::errors::AppError;

/// Owns the signed-in session for every view that needs it.
///
/// `init` restores the persisted session on startup, `establish` stores a
/// new one after login and `teardown` clears it on logout or when the
/// backend answers 401.
pub struct SessionContext<S: SessionStore> {
    store: S,
    current: Option<Session>,
}

impl<S: SessionStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn init(&mut self) -> Option<&Session> {
        self.current = match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Discarding unreadable session: {}", e);
                if let Err(e) = self.store.clear() {
                    log::warn!("Failed to clear session storage: {}", e);
                }
                None
            }
        };
        if let Some(session) = &self.current {
            log::info!("Restored session for {}", session.user.email);
        }
        self.current.as_ref()
    }

    pub fn establish(&mut self, session: Session) -> Result<&Session, AppError> {
        self.store.save(&session)?;
        log::info!("Signed in as {}", session.user.email);
        Ok(self.current.insert(session))
    }

    pub fn teardown(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("Signing out {}", session.user.email);
        }
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear session storage: {}", e);
        }
    }

    /// Tears the session down on `Unauthorized`. Returns true when the view
    /// must redirect to login.
    pub fn observe(&mut self, error: &AppError) -> bool {
        if error.requires_login() {
            log::warn!("Authentication failed - clearing session");
            self.teardown();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.user.is_admin())
    }

    pub fn bearer(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.jwt_token.as_str())
    }

    pub fn require_login(&self) -> Result<&Session, AppError> {
        self.current.as_ref().ok_or(AppError::Unauthorized)
    }

    pub fn require_admin(&self) -> Result<&Session, AppError> {
        let session = self.require_login()?;
        if session.user.is_admin() {
            Ok(session)
        } else {
            Err(AppError::Forbidden)
        }
    }
}
