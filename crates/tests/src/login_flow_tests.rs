use api_client::jwt;
use api_client::session::Session;
use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, LoginResponse, Role};

use crate::common;

/// Assemble a session from a login response the way the login page does,
/// falling back to the JWT role claim and the submitted email when the
/// profile fields are absent.
fn build_session(request: &LoginRequest, response: LoginResponse) -> Session {
    let role = match response.role.as_deref() {
        Some(name) => Role::from_str_or_default(name),
        None => jwt::decode_claims(&response.token)
            .map(|claims| Role::from_str_or_default(&claims.role))
            .unwrap_or_default(),
    };
    Session {
        token: response.token,
        role,
        email: response.email.unwrap_or_else(|| request.email.clone()),
        username: response.username.unwrap_or_else(|| request.email.clone()),
        user_id: None,
    }
}

#[test]
fn test_login_body_and_token_claim_agree_on_role() {
    let exp = chrono::Utc::now().timestamp() + 24 * 3600;
    let token = common::make_token("maya@bytelms.dev", "STUDENT", exp);
    let body = serde_json::json!({
        "token": token,
        "email": "maya@bytelms.dev",
        "username": "maya",
        "role": "ROLE_STUDENT",
        "message": "Login successful!"
    });

    let request = LoginRequest {
        email: "maya@bytelms.dev".into(),
        password: "hunter2".into(),
    };
    let response: LoginResponse = serde_json::from_value(body).unwrap();
    let session = build_session(&request, response);

    assert_eq!(session.role, Role::Student);
    assert_eq!(session.email, "maya@bytelms.dev");
    assert_eq!(session.username, "maya");
    assert!(jwt::is_token_valid(&session.token));

    // The body carries the prefixed role, the token the stripped one.
    // Both must land on the same Role.
    let claims = jwt::decode_claims(&session.token).unwrap();
    assert_eq!(claims.sub, session.email);
    assert_eq!(Role::from_str_or_default(&claims.role), session.role);
}

#[test]
fn test_token_only_body_falls_back_to_claim_and_submitted_email() {
    let exp = chrono::Utc::now().timestamp() + 24 * 3600;
    let token = common::make_token("omar@bytelms.dev", "INSTRUCTOR", exp);
    let body = serde_json::json!({"token": token});

    let request = LoginRequest {
        email: "omar@bytelms.dev".into(),
        password: "hunter2".into(),
    };
    let response: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.email, None, "fixture must omit the profile fields");

    let session = build_session(&request, response);
    assert_eq!(session.email, "omar@bytelms.dev");
    assert_eq!(session.username, "omar@bytelms.dev");
    assert_eq!(
        session.role,
        Role::Instructor,
        "missing role field must be recovered from the token claim"
    );
}

#[test]
fn test_garbage_token_without_role_field_defaults_to_student() {
    let body = serde_json::json!({"token": "not-a-jwt"});

    let request = LoginRequest {
        email: "omar@bytelms.dev".into(),
        password: "hunter2".into(),
    };
    let response: LoginResponse = serde_json::from_value(body).unwrap();
    let session = build_session(&request, response);
    assert_eq!(session.role, Role::Student);
}

#[test]
fn test_instructor_login_is_not_collapsed_to_student() {
    let exp = chrono::Utc::now().timestamp() + 24 * 3600;
    let token = common::make_token("ada@bytelms.dev", "INSTRUCTOR", exp);
    let body = serde_json::json!({
        "token": token,
        "email": "ada@bytelms.dev",
        "username": "ada",
        "role": "ROLE_INSTRUCTOR",
        "message": "Login successful!"
    });

    let request = LoginRequest {
        email: "ada@bytelms.dev".into(),
        password: "hunter2".into(),
    };
    let response: LoginResponse = serde_json::from_value(body).unwrap();
    let session = build_session(&request, response);

    assert_eq!(session.role, Role::Instructor);
    let claims = jwt::decode_claims(&session.token).unwrap();
    assert_eq!(Role::from_str_or_default(&claims.role), Role::Instructor);
}
