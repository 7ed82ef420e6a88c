use yew::prelude::*;

use crate::models::TenantStatus;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: TenantStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = match props.status {
        TenantStatus::Active => "badge badge-active",
        TenantStatus::Trial => "badge badge-trial",
        TenantStatus::Suspended => "badge badge-suspended",
    };
    html! { <span {class}>{ props.status.label() }</span> }
}
