use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

use crate::config;
use crate::session;

// --- Request building ---

/// Build a request for an API path, attaching the bearer token when a
/// session is active.
pub(crate) fn request(method: Method, path: &str) -> RequestBuilder {
    let builder = reqwest::Client::new().request(method, config::endpoint(path));
    match session::auth_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

// --- Response handling ---

async fn send(builder: RequestBuilder) -> Result<Response, AppError> {
    let response = builder.send().await.map_err(|e| {
        tracing::warn!(error = %e, "Request never reached the server");
        AppError::network("Could not reach the server. Check your connection and try again.")
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let error = AppError::from_response_body(status.as_u16(), &body);
    tracing::warn!(status = status.as_u16(), kind = %error.kind, "API request rejected");
    Err(error)
}

/// Send a request and decode its JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, AppError> {
    let response = send(builder).await?;
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "Response body did not match the expected shape");
        AppError::internal("The server sent an unexpected response")
    })
}

/// Send a request and return the body as text. A few endpoints confirm
/// with a bare string instead of JSON.
pub(crate) async fn send_text(builder: RequestBuilder) -> Result<String, AppError> {
    let response = send(builder).await?;
    response.text().await.map_err(|e| {
        tracing::warn!(error = %e, "Response body could not be read");
        AppError::internal("The server sent an unexpected response")
    })
}

// --- Convenience wrappers ---

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    send_json(request(Method::GET, path)).await
}

pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(request(Method::POST, path).json(body)).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    send_json(request(Method::POST, path)).await
}

pub(crate) async fn put_json<B, T>(path: &str, body: &B) -> Result<T, AppError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(request(Method::PUT, path).json(body)).await
}

pub(crate) async fn delete_text(path: &str) -> Result<String, AppError> {
    send_text(request(Method::DELETE, path)).await
}
