use std::sync::{PoisonError, RwLock};

use shared_types::Role;

/// Snapshot of the signed-in user, mirrored from browser storage so the
/// HTTP layer can read the bearer token synchronously.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
    pub username: String,
    /// Numeric user id. The login response and JWT only carry the email,
    /// so this stays `None` until a later lookup fills it in.
    pub user_id: Option<i64>,
}

/// In-memory session store. One writer (the auth flow), many readers.
static SESSION: RwLock<Option<Session>> = RwLock::new(None);

/// Replace the active session. Called on login and on startup restore.
pub fn set_session(session: Session) {
    let mut guard = SESSION.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(session);
}

/// Drop the active session. Called on logout and when a stored token
/// turns out to be expired.
pub fn clear_session() {
    let mut guard = SESSION.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Clone of the active session, if any.
pub fn current_session() -> Option<Session> {
    let guard = SESSION.read().unwrap_or_else(PoisonError::into_inner);
    guard.clone()
}

/// The bearer token for outgoing requests, if a session is active.
pub fn auth_token() -> Option<String> {
    let guard = SESSION.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().map(|s| s.token.clone())
}

/// Role of the signed-in user, if any.
pub fn current_role() -> Option<Role> {
    let guard = SESSION.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().map(|s| s.role)
}

/// Fill in the numeric user id once a lookup has resolved it.
pub fn set_user_id(user_id: i64) {
    let mut guard = SESSION.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(session) = guard.as_mut() {
        session.user_id = Some(user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // The store is process-global, so the whole lifecycle lives in one
    // test to keep the ordering deterministic.
    #[test]
    fn session_lifecycle() {
        assert_eq!(current_session(), None);
        assert_eq!(auth_token(), None);
        assert_eq!(current_role(), None);

        // set_user_id before any session is a no-op
        set_user_id(7);
        assert_eq!(current_session(), None);

        set_session(Session {
            token: "tok-123".into(),
            role: Role::Instructor,
            email: "ada@bytelms.io".into(),
            username: "ada".into(),
            user_id: None,
        });

        assert_eq!(auth_token().as_deref(), Some("tok-123"));
        assert_eq!(current_role(), Some(Role::Instructor));
        let session = current_session().unwrap();
        assert_eq!(session.username, "ada");
        assert_eq!(session.user_id, None);

        set_user_id(42);
        assert_eq!(current_session().unwrap().user_id, Some(42));

        clear_session();
        assert_eq!(current_session(), None);
        assert_eq!(auth_token(), None);
    }
}
