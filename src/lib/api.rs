//! HTTP helpers for the backend JSON API with a shared timeout and error policy.
//! Feature clients call these instead of building requests themselves, so every
//! session call includes cookies and every call aborts after the same deadline.
//! The helpers never see session tokens except as already-serialized bodies.

use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};
#[cfg(target_arch = "wasm32")]
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
pub(crate) const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Whether the browser should attach the session cookie.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Credentials {
    Include,
    Omit,
}

/// Fetches public JSON, used for blog content.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_credentials(Request::get(&url), Credentials::Omit)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches JSON with cookies for session-authenticated APIs.
#[cfg(target_arch = "wasm32")]
pub async fn get_json_with_credentials<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_credentials(Request::get(&url), Credentials::Include)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON without cookies and ignores the response body.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = post_with(path, body, Credentials::Omit).await?;
    handle_empty_response(response).await
}

/// Posts JSON with cookies and parses a JSON response.
/// The backend may answer with `Set-Cookie`, so credentials are always included.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_with_credentials<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = post_with(path, body, Credentials::Include).await?;
    handle_json_response(response).await
}

/// Posts an empty JSON object with cookies, used to clear a session.
#[cfg(target_arch = "wasm32")]
pub async fn post_empty_with_credentials(path: &str) -> Result<(), AppError> {
    let response = post_with(path, &serde_json::json!({}), Credentials::Include).await?;
    handle_empty_response(response).await
}

#[cfg(target_arch = "wasm32")]
async fn post_with<B: Serialize>(
    path: &str,
    body: &B,
    credentials: Credentials,
) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    send_with_timeout(move |signal| {
        with_credentials(Request::post(&url), credentials)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder, credentials: Credentials) -> RequestBuilder {
    match credentials {
        Credentials::Include => builder.credentials(RequestCredentials::Include),
        Credentials::Omit => builder,
    }
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    classify_request_error(&err.to_string())
}

fn classify_request_error(message: &str) -> AppError {
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout so a hung backend cannot pin the UI
/// in a loading state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(&body),
        })
    }
}

/// Accepts any 2xx response and drops its body.
#[cfg(target_arch = "wasm32")]
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(&body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
