// Dashboard charts. Rendering is deliberately plain (proportional bars);
// the interesting part is the fetch/error/empty handling around them.

use yew::prelude::*;

use crate::hooks::{producer, use_fetch};
use crate::models::{PlanTenantCount, StatusCount};
use crate::services::{plan_service, tenant_service, ApiError};

fn chart_error(error: &ApiError) -> Html {
    html! {
        <div class="chart-state chart-error">
            <h3>{ format!("{}", error.status) }</h3>
            <p>{ "An error occurred while loading data." }</p>
            <p>{ &error.message }</p>
        </div>
    }
}

fn chart_skeleton() -> Html {
    html! {
        <div class="chart-state">
            <div class="skeleton skeleton-line" />
            <div class="skeleton skeleton-chart" />
        </div>
    }
}

fn chart_empty() -> Html {
    html! {
        <div class="chart-state">
            <h3>{ "No data available" }</h3>
            <p>{ "No data was found for the specified period. Please try again later." }</p>
        </div>
    }
}

/// Current plan distribution (GET /plans/tenant-count).
#[function_component(TenantsByPlanChart)]
pub fn tenants_by_plan_chart() -> Html {
    let counts = use_fetch::<Vec<PlanTenantCount>>(Some(producer(|| {
        plan_service::fetch_tenant_count()
    })));
    let state = &*counts.state;

    let body = if let Some(error) = &state.error {
        chart_error(error)
    } else if state.loading {
        chart_skeleton()
    } else if state.data.is_empty() {
        chart_empty()
    } else {
        let max = state
            .data
            .iter()
            .map(|row| row.tenant_count)
            .max()
            .unwrap_or(1)
            .max(1);
        html! {
            <div class="bar-chart">
                { for state.data.iter().map(|row| {
                    let width = format!("width: {}%", row.tenant_count * 100 / max);
                    html! {
                        <div class="bar-row" key={row.plan_name.clone()}>
                            <span class="bar-label">{ &row.plan_name }</span>
                            <div class="bar-track">
                                <div class="bar-fill" style={width} />
                            </div>
                            <span class="bar-count">{ row.tenant_count }</span>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="card chart-card">
            <h3>{ "Tenants by Plan" }</h3>
            <p class="card-description">{ "Current plan distribution" }</p>
            { body }
        </div>
    }
}

/// Status distribution (GET /tenants/stats).
#[function_component(TenantsByStatusChart)]
pub fn tenants_by_status_chart() -> Html {
    let counts = use_fetch::<Vec<StatusCount>>(Some(producer(|| {
        tenant_service::fetch_tenants_stats()
    })));
    let state = &*counts.state;

    let body = if let Some(error) = &state.error {
        chart_error(error)
    } else if state.loading {
        chart_skeleton()
    } else if state.data.is_empty() {
        chart_empty()
    } else {
        let total: u32 = state.data.iter().map(|row| row.count).sum();
        let total = total.max(1);
        html! {
            <div class="bar-chart">
                { for state.data.iter().map(|row| {
                    let share = row.count * 100 / total;
                    html! {
                        <div class="bar-row" key={row.status.clone()}>
                            <span class="bar-label">{ &row.status }</span>
                            <div class="bar-track">
                                <div class={format!("bar-fill status-{}", row.status)}
                                     style={format!("width: {}%", share)} />
                            </div>
                            <span class="bar-count">{ format!("{} ({}%)", row.count, share) }</span>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="card chart-card">
            <h3>{ "Tenants by Status" }</h3>
            <p class="card-description">{ "Current status distribution" }</p>
            { body }
        </div>
    }
}
