// ============================================================================
// API CLIENT - HTTP transport only (stateless)
// ============================================================================
// No business logic here; every service goes through these helpers so the
// cookie session and error decoding behave the same on all endpoints.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::RequestCredentials;

use crate::config::api_url;

/// Structured failure surfaced by the backend, `{ status, message }`.
#[derive(Clone, PartialEq, Deserialize, Debug, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    /// Synthesized error for failures carrying no structured payload
    /// (network down, unparseable body).
    pub fn fallback() -> Self {
        Self {
            status: 404,
            message: "An error occurred while fetching data".to_string(),
        }
    }
}

async fn decode_error(response: Response) -> ApiError {
    let http_status = response.status();
    match response.json::<ApiError>().await {
        Ok(mut err) if !err.message.is_empty() => {
            if err.status == 0 {
                err.status = http_status;
            }
            err
        }
        _ => ApiError::fallback(),
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(decode_error(response).await);
    }
    response.json::<T>().await.map_err(|err| {
        log::error!("Parse error: {}", err);
        ApiError::fallback()
    })
}

fn network_error(err: gloo_net::Error) -> ApiError {
    log::error!("Network error: {}", err);
    ApiError::fallback()
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(network_error)?;
    parse_response(response).await
}

pub async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .query(query.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(network_error)?;
    parse_response(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    parse_response(response).await
}

/// POST without a body, for endpoints like /auth/logout.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(decode_error(response).await);
    }
    Ok(())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    parse_response(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = Request::patch(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    parse_response(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(decode_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_error_is_the_synthesized_payload() {
        let err = ApiError::fallback();
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "An error occurred while fetching data");
    }

    #[test]
    fn backend_error_payload_deserializes() {
        let err: ApiError =
            serde_json::from_str(r#"{"status":400,"message":"In use"}"#).unwrap();
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "In use");
        assert_eq!(err.to_string(), "In use (status 400)");
    }
}
