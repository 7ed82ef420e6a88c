use serde::{Deserialize, Serialize};

use super::plan::Limits;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Trial,
    Suspended,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Trial => "trial",
            TenantStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TenantStatus::Active => "Active",
            TenantStatus::Trial => "Trial",
            TenantStatus::Suspended => "Suspended",
        }
    }
}

/// The plan a tenant is subscribed to, as embedded in tenant records.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TenantPlanRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// A customer account (a kindergarten). Server-owned record.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: TenantStatus,
    #[serde(default)]
    pub plan: Option<TenantPlanRef>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub start_subscription: Option<String>,
    #[serde(default)]
    pub end_subscription: Option<String>,
    #[serde(default)]
    pub limits: Limits,
}

/// Create/update payload for a tenant.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TenantDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: TenantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_subscription: Option<String>,
    pub limits: Limits,
}

/// Payload of PATCH /tenants/:id/change-plan.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePlanPayload {
    pub new_plan_id: String,
    pub status: TenantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailPayload {
    pub old_email: String,
    pub new_email: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
}

/// One page of GET /tenants results.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct TenantPage {
    #[serde(default)]
    pub data: Vec<Tenant>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Status filter of the tenant list. `All` means no status constraint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Trial,
    Suspended,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Trial => "trial",
            StatusFilter::Suspended => "suspended",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "trial" => StatusFilter::Trial,
            "suspended" => StatusFilter::Suspended,
            _ => StatusFilter::All,
        }
    }
}

/// A single filter mutation applied to the list query.
#[derive(Clone, PartialEq, Debug)]
pub enum TenantFilter {
    Status(StatusFilter),
    StartDate(String),
    EndDate(String),
}

/// Server-side query of the tenant list. The exclusive input of
/// GET /tenants; always carries all five parameters.
#[derive(Clone, PartialEq, Debug)]
pub struct TenantListQuery {
    pub status: StatusFilter,
    pub start_date: String,
    pub end_date: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for TenantListQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            start_date: String::new(),
            end_date: String::new(),
            page: 1,
            limit: 10,
        }
    }
}

impl TenantListQuery {
    /// Applies a filter mutation. Any filter change invalidates the current
    /// page, so the page always snaps back to 1.
    pub fn with_filter(mut self, filter: TenantFilter) -> Self {
        match filter {
            TenantFilter::Status(status) => self.status = status,
            TenantFilter::StartDate(date) => self.start_date = date,
            TenantFilter::EndDate(date) => self.end_date = date,
        }
        self.page = 1;
        self
    }

    /// Moves to another page without touching the filters.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("status", self.status.as_str().to_string()),
            ("startDate", self.start_date.clone()),
            ("endDate", self.end_date.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_mounted_view() {
        let query = TenantListQuery::default();
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.start_date, "");
        assert_eq!(query.end_date, "");
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn every_filter_mutation_resets_the_page() {
        let mut query = TenantListQuery::default().with_page(4);
        assert_eq!(query.page, 4);

        query = query.with_filter(TenantFilter::Status(StatusFilter::Trial));
        assert_eq!(query.page, 1);

        query = query.with_page(3);
        query = query.with_filter(TenantFilter::StartDate("2026-01-01".into()));
        assert_eq!(query.page, 1);

        query = query.with_page(2);
        query = query.with_filter(TenantFilter::EndDate("2026-12-31".into()));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn page_changes_leave_filters_alone() {
        let query = TenantListQuery::default()
            .with_filter(TenantFilter::Status(StatusFilter::Trial))
            .with_page(5);
        assert_eq!(query.status, StatusFilter::Trial);
        assert_eq!(query.page, 5);
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        let query = TenantListQuery::default().with_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn query_carries_all_five_parameters() {
        let query = TenantListQuery::default()
            .with_filter(TenantFilter::Status(StatusFilter::Trial));
        assert_eq!(
            query.to_query(),
            vec![
                ("status", "trial".to_string()),
                ("startDate", String::new()),
                ("endDate", String::new()),
                ("page", "1".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }
}
