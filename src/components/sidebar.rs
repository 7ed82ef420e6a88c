use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::use_session;
use crate::services::auth_service;

const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Dashboard, "Dashboard"),
    (Route::Plans, "Plans"),
    (Route::Tenants, "Tenants"),
    (Route::ResendLoginInfo, "Resend Login Info"),
    (Route::UpdateTenantEmail, "Update Tenant Email"),
];

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = {
        let set_user = session.set_user.clone();
        Callback::from(move |_: MouseEvent| {
            let set_user = set_user.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::logout().await {
                    Ok(()) => {
                        set_user.emit(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Signin);
                        }
                    }
                    Err(err) => log::error!("Logout failed: {}", err),
                }
            });
        })
    };

    let operator = session
        .user
        .as_ref()
        .and_then(|user| user.name.clone())
        .unwrap_or_else(|| "Operator".to_string());

    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">{ "Rawda Admin" }</div>
            <nav class="sidebar-nav">
                { for NAV_ITEMS.iter().map(|(route, label)| {
                    let class = if *route == props.active {
                        "sidebar-link sidebar-link-active"
                    } else {
                        "sidebar-link"
                    };
                    html! { <Link<Route> to={*route} classes={class}>{ *label }</Link<Route>> }
                }) }
            </nav>
            <div class="sidebar-footer">
                <span class="sidebar-user">{ operator }</span>
                <button class="btn-logout" onclick={on_logout}>{ "Log Out" }</button>
            </div>
        </aside>
    }
}
