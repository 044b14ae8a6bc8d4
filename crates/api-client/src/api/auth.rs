use shared_types::{AppError, LoginRequest, LoginResponse, MessageResponse, SignupRequest};

use crate::http;

/// Exchange credentials for a JWT and the signed-in user's profile fields.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    http::post_json("/auth/login", request).await
}

/// Register a new account. The backend answers with a confirmation
/// message; signing in is a separate step.
pub async fn signup(request: &SignupRequest) -> Result<MessageResponse, AppError> {
    http::post_json("/auth/signup", request).await
}
