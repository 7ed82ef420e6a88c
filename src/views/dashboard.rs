use yew::prelude::*;

use crate::components::charts::{TenantsByPlanChart, TenantsByStatusChart};
use crate::components::stat_card::StatCard;
use crate::hooks::{producer, use_fetch};
use crate::models::DashboardStats;
use crate::services::tenant_service;
use crate::utils::format_currency_dzd;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let stats = use_fetch::<DashboardStats>(Some(producer(|| {
        tenant_service::fetch_dashboard_stats()
    })));
    let state = &*stats.state;

    let cards: [(&str, String, &str); 4] = [
        (
            "Number of shared kindergartens",
            format!("{} kindergartens", state.data.tenants),
            "Currently active kindergartens on the system",
        ),
        (
            "Current monthly income",
            format_currency_dzd(Some(state.data.month_income)),
            "Subscriptions renewed this month.",
        ),
        (
            "Current yearly income",
            format_currency_dzd(Some(state.data.year_income)),
            "Subscriptions renewed this year.",
        ),
        (
            "Kindergartens in need of renewal",
            format!("{} kindergartens", state.data.expired),
            "Subscriptions that expired and were not renewed.",
        ),
    ];

    html! {
        <div class="dashboard">
            if let Some(error) = &state.error {
                <p class="form-error">{ format!("{} ({})", error.message, error.status) }</p>
            }
            <div class="stat-grid">
                { for cards.iter().map(|(title, value, sub_label)| html! {
                    <StatCard
                        title={*title}
                        value={value.clone()}
                        sub_label={*sub_label}
                        loading={state.loading}
                    />
                }) }
            </div>
            <div class="chart-grid">
                <TenantsByPlanChart />
                <TenantsByStatusChart />
            </div>
        </div>
    }
}
