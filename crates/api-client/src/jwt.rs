use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use shared_types::{AppError, Claims};

/// Decode the payload segment of a JWT without verifying the signature.
/// The signing key never leaves the backend; the client only reads the
/// claims it needs (subject, role, expiry).
pub fn decode_claims(token: &str) -> Result<Claims, AppError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AppError::unauthorized("Session token is not a JWT"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| AppError::unauthorized("Session token payload is not base64"))?;

    serde_json::from_slice(&bytes)
        .map_err(|_| AppError::unauthorized("Session token payload is not valid JSON"))
}

/// Whether a token decodes and its `exp` claim is still in the future.
/// Undecodable tokens count as expired.
pub fn is_token_valid(token: &str) -> bool {
    match decode_claims(token) {
        Ok(claims) => !claims.is_expired(chrono::Utc::now().timestamp()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    fn make_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS512"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_backend_shaped_claims() {
        let token = make_token(serde_json::json!({
            "sub": "student@bytelms.io",
            "role": "STUDENT",
            "iat": 1_700_000_000,
            "exp": 1_700_086_400,
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "student@bytelms.io");
        assert_eq!(claims.role, "STUDENT");
        assert_eq!(claims.exp, 1_700_086_400);
    }

    #[test]
    fn tolerates_base64_padding() {
        let token = make_token(serde_json::json!({"sub": "a@b.io", "exp": 1}));
        let (head, rest) = token.split_once('.').unwrap();
        let (body, sig) = rest.split_once('.').unwrap();
        let padded = format!("{head}.{body}==.{sig}");

        assert_eq!(decode_claims(&padded).unwrap().sub, "a@b.io");
    }

    #[test]
    fn rejects_token_without_payload_segment() {
        let err = decode_claims("not-a-jwt").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn rejects_garbage_payload() {
        assert!(decode_claims("aGVhZA.!!!not-base64!!!.sig").is_err());
        let not_json = format!("head.{}.sig", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert!(decode_claims(&not_json).is_err());
    }

    #[test]
    fn expired_token_is_invalid() {
        let token = make_token(serde_json::json!({
            "sub": "a@b.io",
            "role": "ADMIN",
            "exp": 1_000,
        }));
        assert!(!is_token_valid(&token));
    }

    #[test]
    fn future_expiry_is_valid() {
        let exp = chrono::Utc::now().timestamp() + 24 * 3600;
        let token = make_token(serde_json::json!({
            "sub": "a@b.io",
            "role": "ADMIN",
            "exp": exp,
        }));
        assert!(is_token_valid(&token));
    }

    #[test]
    fn missing_exp_claim_is_invalid() {
        let token = make_token(serde_json::json!({"sub": "a@b.io"}));
        assert!(!is_token_valid(&token));
    }
}
