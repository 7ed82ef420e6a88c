use serde::Deserialize;

/// Headline metrics of GET /tenants/dashboard-stats.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub tenants: u32,
    #[serde(default)]
    pub month_income: f64,
    #[serde(default)]
    pub year_income: f64,
    #[serde(default)]
    pub expired: u32,
}

/// One bar of the tenants-by-plan chart (GET /plans/tenant-count).
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlanTenantCount {
    pub plan_name: String,
    #[serde(default)]
    pub tenant_count: u32,
}

/// One slice of the tenants-by-status chart (GET /tenants/stats).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StatusCount {
    pub status: String,
    #[serde(default)]
    pub count: u32,
}
