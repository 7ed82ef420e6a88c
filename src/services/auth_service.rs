use crate::models::{MeResponse, SigninRequest, SigninResponse, User};
use crate::services::api_client::{self, ApiError};

/// One-time session bootstrap: resolves the current operator or fails.
pub async fn fetch_me() -> Result<User, ApiError> {
    let response: MeResponse = api_client::get_json("/auth/me").await?;
    Ok(response.user)
}

/// Credentials (and, on the second round, OTP) submission.
pub async fn signin(request: &SigninRequest) -> Result<SigninResponse, ApiError> {
    api_client::post_json("/auth/signin", request).await
}

pub async fn logout() -> Result<(), ApiError> {
    api_client::post_empty("/auth/logout").await
}
