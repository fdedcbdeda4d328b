//! HTTP helper for the QuizDeck API with a consistent timeout and error
//! handling policy. The account endpoints take URL-encoded form bodies and
//! answer with a JSON envelope on success and on rejection alike, so the
//! response handling here decodes both paths the same way instead of trusting
//! the status code alone.

#[cfg(target_arch = "wasm32")]
use super::config::AppConfig;
use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};
#[cfg(target_arch = "wasm32")]
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to every call.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Posts `form` URL-encoded to `path` under the configured API base and
/// parses the JSON response body.
///
/// One HTTP POST per call, no retries. Non-2xx replies that still decode as
/// `T` are returned as `Ok` so callers can read the server's
/// application-level verdict; anything else maps to a typed [`AppError`].
#[cfg(target_arch = "wasm32")]
pub async fn post_form<B: Serialize, T: DeserializeOwned>(
    path: &str,
    form: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = serde_urlencoded::to_string(form)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
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
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON out of both success and error replies. The API reports
/// application-level rejections as a JSON body on a non-2xx status, and that
/// body decodes exactly like a success body does.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if let Ok(decoded) = serde_json::from_str::<T>(&body) {
            return Ok(decoded);
        }
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ERROR_CHARS, build_url_with_base, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.quizdeck.app", "/auth/register"),
            "https://api.quizdeck.app/auth/register"
        );
        assert_eq!(
            build_url_with_base("https://api.quizdeck.app/", "auth/login"),
            "https://api.quizdeck.app/auth/login"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_path_relative() {
        assert_eq!(build_url_with_base("", "/auth/login"), "/auth/login");
        assert_eq!(build_url_with_base("   ", "/auth/login"), "/auth/login");
    }

    #[test]
    fn sanitize_body_replaces_empty_bodies() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  \n ".to_string()), "Request failed.");
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("  boom  ".to_string()), "boom");

        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(sanitize_body(long).chars().count(), MAX_ERROR_CHARS);
    }
}
