use dioxus::prelude::*;

use api_client::session::{self, Session};
use shared_types::{AppError, Role};

use crate::routes::Route;
use crate::storage;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear_auth(&mut self) {
        self.session.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The landing route for a role, used after login and when an authenticated
/// user hits the login or signup page.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Instructor => Route::InstructorDashboard {},
        Role::Student => Route::StudentDashboard {},
    }
}

/// Restore the session from local storage.
///
/// Returns None when no token is stored or the stored token has expired.
/// An expired token is cleared so the next page load starts clean.
pub async fn restore_session() -> Option<Session> {
    if let Some(active) = session::current_session() {
        return Some(active);
    }

    let stored = storage::read_auth().await?;
    if !api_client::jwt::is_token_valid(&stored.token) {
        tracing::info!("stored token invalid or expired, clearing credentials");
        storage::clear_auth();
        return None;
    }

    let restored = Session {
        token: stored.token,
        role: Role::from_str_or_default(&stored.role),
        email: stored.email,
        username: stored.username,
        user_id: None,
    };
    session::set_session(restored.clone());
    Some(restored)
}

/// Persist a fresh login and make it the active session.
pub fn start_session(auth: &mut AuthState, session: Session) {
    storage::persist_auth(&session);
    session::set_session(session.clone());
    auth.set_session(session);
}

/// Drop the active session and the stored credentials.
pub fn sign_out(auth: &mut AuthState) {
    session::clear_session();
    storage::clear_auth();
    auth.clear_auth();
}

/// Resolve the signed-in user's numeric id, caching it on the session.
///
/// The login response and token carry the email but no id, so the first
/// caller looks it up by matching the email against the user roster.
pub async fn resolve_user_id() -> Result<i64, AppError> {
    let current =
        session::current_session().ok_or_else(|| AppError::unauthorized("Not signed in"))?;
    if let Some(id) = current.user_id {
        return Ok(id);
    }

    let users = api_client::api::admin::list_users().await?;
    let id = users
        .iter()
        .find(|u| u.email == current.email)
        .map(|u| u.id)
        .ok_or_else(|| AppError::not_found("Your account could not be found"))?;
    session::set_user_id(id);
    Ok(id)
}
