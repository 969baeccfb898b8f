use crate::errors::AppError;

/// State of one request as a view sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Pending,
    Success(T),
    Failure(AppError),
}

impl<T> Outcome<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Outcome::Failure(e) => Some(e),
            _ => None,
        }
    }

    /// User-visible notice for a failed request.
    pub fn notice(&self) -> Option<String> {
        self.error().map(AppError::notice)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Pending => Outcome::Pending,
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }
}

impl<T> From<Result<T, AppError>> for Outcome<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ACCESS_DENIED_NOTICE;

    #[test]
    fn result_converts_exhaustively() {
        let ok: Outcome<u32> = Ok(3).into();
        assert_eq!(ok.success(), Some(&3));
        assert!(ok.notice().is_none());

        let failed: Outcome<u32> = Err(AppError::Forbidden).into();
        assert_eq!(failed.error(), Some(&AppError::Forbidden));
        assert_eq!(failed.notice().as_deref(), Some(ACCESS_DENIED_NOTICE));
    }

    #[test]
    fn map_preserves_pending_and_failure() {
        let pending: Outcome<u32> = Outcome::Pending;
        assert!(pending.map(|v| v * 2).is_pending());

        let doubled = Outcome::Success(4).map(|v| v * 2);
        assert_eq!(doubled, Outcome::Success(8));
    }
}
