use crate::models::{
    ChangePlanPayload, DashboardStats, MessageResponse, StatusCount, Tenant, TenantDraft,
    TenantListQuery, TenantPage, UpdateEmailPayload,
};
use crate::services::api_client::{self, ApiError};

/// Server-paginated tenant list; the query is the exclusive input.
pub async fn fetch_tenants(query: &TenantListQuery) -> Result<TenantPage, ApiError> {
    api_client::get_json_with_query("/tenants", &query.to_query()).await
}

/// Status-distribution aggregate.
pub async fn fetch_tenants_stats() -> Result<Vec<StatusCount>, ApiError> {
    api_client::get_json("/tenants/stats").await
}

/// Headline dashboard metrics.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    api_client::get_json("/tenants/dashboard-stats").await
}

pub async fn create_tenant(draft: &TenantDraft) -> Result<Tenant, ApiError> {
    api_client::post_json("/tenants", draft).await
}

pub async fn update_tenant(id: &str, draft: &TenantDraft) -> Result<Tenant, ApiError> {
    api_client::put_json(&format!("/tenants/{}", id), draft).await
}

pub async fn change_plan(id: &str, payload: &ChangePlanPayload) -> Result<Tenant, ApiError> {
    api_client::patch_json(&format!("/tenants/{}/change-plan", id), payload).await
}

pub async fn delete_tenant(id: &str) -> Result<(), ApiError> {
    api_client::delete(&format!("/tenants/{}", id)).await
}

/// Resend the tenant's credentials mail.
pub async fn resend_login_info(email: &str) -> Result<MessageResponse, ApiError> {
    api_client::post_json(
        "/tenants/resend-login-info",
        &serde_json::json!({ "email": email }),
    )
    .await
}

pub async fn update_email(payload: &UpdateEmailPayload) -> Result<MessageResponse, ApiError> {
    api_client::post_json("/tenants/update-email", payload).await
}
