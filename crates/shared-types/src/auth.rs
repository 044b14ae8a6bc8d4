use serde::{Deserialize, Serialize};

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request. The public signup page always sends the student role;
/// instructor and admin accounts are provisioned through the admin screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Successful login payload. `role` arrives in the prefixed form
/// (`ROLE_STUDENT`); everything except the token is optional because older
/// backend builds returned the bare token string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Plain `{ "message": ... }` payload the backend uses for signup results
/// and simple acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// JWT payload claims. The backend signs `{ sub: email, role, iat, exp }`
/// with 24-hour validity; the signing key never leaves the backend, so the
/// client reads these without verifying the signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub iat: i64,
    #[serde(default)]
    pub exp: i64,
}

impl Claims {
    /// True once the `exp` claim is in the past. A missing (zero) `exp`
    /// counts as expired rather than immortal.
    pub fn is_expired(&self, now_epoch_seconds: i64) -> bool {
        self.exp <= now_epoch_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn login_response_deserializes_full_payload() {
        let json = r#"{
            "token": "aaa.bbb.ccc",
            "email": "sam@bytelms.dev",
            "username": "sam",
            "role": "ROLE_STUDENT",
            "message": "Login successful!"
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.token, "aaa.bbb.ccc");
        assert_eq!(resp.username.as_deref(), Some("sam"));
        assert_eq!(
            Role::from_str_or_default(resp.role.as_deref().unwrap_or_default()),
            Role::Student
        );
    }

    #[test]
    fn login_response_tolerates_token_only_payload() {
        let json = r#"{"token":"aaa.bbb.ccc"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.token, "aaa.bbb.ccc");
        assert!(resp.role.is_none());
        assert!(resp.message.is_none());
    }

    #[test]
    fn signup_request_serializes_all_fields() {
        let req = SignupRequest {
            username: "sam".into(),
            email: "sam@bytelms.dev".into(),
            password: "hunter2hunter2".into(),
            role: Role::Student.wire_name().into(),
        };
        let json = serde_json::to_string(&req).unwrap();

        assert!(json.contains("\"role\":\"ROLE_STUDENT\""));
        assert!(json.contains("\"email\":\"sam@bytelms.dev\""));
    }

    #[test]
    fn claims_expiry_boundaries() {
        let claims = Claims {
            sub: "sam@bytelms.dev".into(),
            role: "STUDENT".into(),
            iat: 1_000,
            exp: 2_000,
        };

        assert!(!claims.is_expired(1_999));
        assert!(claims.is_expired(2_000));
        assert!(claims.is_expired(3_000));
    }

    #[test]
    fn claims_without_exp_count_as_expired() {
        let json = r#"{"sub":"sam@bytelms.dev"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.exp, 0);
        assert!(claims.is_expired(1));
    }
}
