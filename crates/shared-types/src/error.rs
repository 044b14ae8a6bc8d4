use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    InternalError,
    /// The request never produced an HTTP response (offline, DNS, CORS).
    Network,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
            AppErrorKind::Network => write!(f, "Network"),
        }
    }
}

/// Error body shapes the backend actually sends: `{ "message": ... }` from
/// most controllers, `{ "error": ... }` from the media endpoints.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Structured application error surfaced to pages as toasts or inline text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Forbidden,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
        }
    }

    /// Map an HTTP status to an error kind. Statuses without a dedicated
    /// kind collapse to `InternalError`.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            429 => AppErrorKind::RateLimited,
            _ => AppErrorKind::InternalError,
        };
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build an error from a non-success response body. Prefers the
    /// backend's `message`/`error` JSON fields, then short plain-text
    /// bodies, then a generic per-status message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<BackendErrorBody>(body) {
            if let Some(message) = parsed.message.or(parsed.error) {
                return Self::from_status(status, message);
            }
        }
        let trimmed = body.trim();
        if !trimmed.is_empty()
            && trimmed.len() <= 200
            && !trimmed.starts_with('<')
            && !trimmed.starts_with('{')
        {
            return Self::from_status(status, trimmed);
        }
        Self::from_status(status, format!("Request failed with status {status}"))
    }

    /// Message safe to show the user, with a generic fallback when the
    /// underlying message is empty.
    pub fn user_message(&self) -> String {
        if self.message.trim().is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_codes() {
        assert_eq!(AppError::from_status(400, "").kind, AppErrorKind::BadRequest);
        assert_eq!(
            AppError::from_status(401, "").kind,
            AppErrorKind::Unauthorized
        );
        assert_eq!(AppError::from_status(403, "").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(409, "").kind, AppErrorKind::Conflict);
        assert_eq!(
            AppError::from_status(422, "").kind,
            AppErrorKind::ValidationError
        );
        assert_eq!(
            AppError::from_status(429, "").kind,
            AppErrorKind::RateLimited
        );
    }

    #[test]
    fn from_status_collapses_unknown_codes() {
        for status in [500, 502, 503, 418, 302] {
            assert_eq!(
                AppError::from_status(status, "").kind,
                AppErrorKind::InternalError
            );
        }
    }

    #[test]
    fn from_response_body_extracts_message_field() {
        let err = AppError::from_response_body(400, r#"{"message":"Email already exists!"}"#);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Email already exists!");
    }

    #[test]
    fn from_response_body_extracts_error_field() {
        let err = AppError::from_response_body(500, r#"{"error":"File upload failed: disk full"}"#);
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert_eq!(err.message, "File upload failed: disk full");
    }

    #[test]
    fn from_response_body_uses_short_plain_text() {
        let err = AppError::from_response_body(404, "Course not found");
        assert_eq!(err.message, "Course not found");
    }

    #[test]
    fn from_response_body_falls_back_for_html_or_empty() {
        let err = AppError::from_response_body(502, "<html><body>Bad Gateway</body></html>");
        assert_eq!(err.message, "Request failed with status 502");

        let err = AppError::from_response_body(500, "");
        assert_eq!(err.message, "Request failed with status 500");
    }

    #[test]
    fn user_message_falls_back_when_empty() {
        let err = AppError::internal("");
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");

        let err = AppError::bad_request("Invalid email or password!");
        assert_eq!(err.user_message(), "Invalid email or password!");
    }

    #[test]
    fn display_impl_formats_kind_and_message() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::from_status(409, "Already enrolled in this course");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
