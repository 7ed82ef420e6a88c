use crate::models::{Plan, PlanDraft, PlanTenantCount};
use crate::services::api_client::{self, ApiError};

pub async fn fetch_plans() -> Result<Vec<Plan>, ApiError> {
    api_client::get_json("/plans").await
}

pub async fn create_plan(draft: &PlanDraft) -> Result<Plan, ApiError> {
    api_client::post_json("/plans", draft).await
}

pub async fn update_plan(id: &str, draft: &PlanDraft) -> Result<Plan, ApiError> {
    api_client::put_json(&format!("/plans/{}", id), draft).await
}

pub async fn delete_plan(id: &str) -> Result<(), ApiError> {
    api_client::delete(&format!("/plans/{}", id)).await
}

/// Tenant-count-by-plan aggregate for the dashboard chart.
pub async fn fetch_tenant_count() -> Result<Vec<PlanTenantCount>, ApiError> {
    api_client::get_json("/plans/tenant-count").await
}
