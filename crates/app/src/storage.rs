use dioxus::prelude::*;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "userRole";
const EMAIL_KEY: &str = "userEmail";
const USERNAME_KEY: &str = "username";

/// Credentials persisted in browser local storage between page loads.
#[derive(Clone, Debug)]
pub struct StoredAuth {
    pub token: String,
    pub role: String,
    pub email: String,
    pub username: String,
}

/// Read the persisted credentials, if a token is present.
pub async fn read_auth() -> Option<StoredAuth> {
    let token = get_item(TOKEN_KEY).await?;
    Some(StoredAuth {
        token,
        role: get_item(ROLE_KEY).await.unwrap_or_default(),
        email: get_item(EMAIL_KEY).await.unwrap_or_default(),
        username: get_item(USERNAME_KEY).await.unwrap_or_default(),
    })
}

/// Persist a fresh login. The role is stored in its short form ("ADMIN",
/// not "ROLE_ADMIN") so reads never need to strip the prefix again.
pub fn persist_auth(session: &api_client::session::Session) {
    set_item(TOKEN_KEY, &session.token);
    set_item(ROLE_KEY, session.role.as_str());
    set_item(EMAIL_KEY, &session.email);
    set_item(USERNAME_KEY, &session.username);
}

/// Remove all persisted credentials.
pub fn clear_auth() {
    for key in [TOKEN_KEY, ROLE_KEY, EMAIL_KEY, USERNAME_KEY] {
        remove_item(key);
    }
}

async fn get_item(key: &str) -> Option<String> {
    let js = format!(r#"return localStorage.getItem("{key}");"#);
    match document::eval(&js).await {
        Ok(value) => value.as_str().map(|s| s.to_string()),
        Err(_) => None,
    }
}

fn set_item(key: &str, value: &str) {
    // serde_json quoting keeps arbitrary usernames safe inside the script
    let quoted = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!(r#"localStorage.setItem("{key}", {quoted});"#));
}

fn remove_item(key: &str) {
    document::eval(&format!(r#"localStorage.removeItem("{key}");"#));
}
