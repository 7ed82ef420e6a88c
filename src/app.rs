use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::context::{AuthProvider, ToastProvider};
use crate::views::dashboard::DashboardView;
use crate::views::plans::PlansView;
use crate::views::resend_login_info::ResendLoginInfoView;
use crate::views::signin::SigninView;
use crate::views::tenants::TenantsView;
use crate::views::update_tenant_email::UpdateTenantEmailView;

/// Client-side routes. Everything except /signin requires a session.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/plans")]
    Plans,
    #[at("/tenants")]
    Tenants,
    #[at("/resend-login-info")]
    ResendLoginInfo,
    #[at("/update-tenant-email")]
    UpdateTenantEmail,
    #[at("/signin")]
    Signin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Header title of the route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Plans => "Plans",
            Route::Tenants => "Tenants",
            Route::ResendLoginInfo => "Resend Login Info",
            Route::UpdateTenantEmail => "Update Tenant Email",
            Route::Signin => "Sign In",
            Route::NotFound => "Rawda Platform",
        }
    }
}

fn protected_view(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardView /> },
        Route::Plans => html! { <PlansView /> },
        Route::Tenants => html! { <TenantsView /> },
        Route::ResendLoginInfo => html! { <ResendLoginInfoView /> },
        Route::UpdateTenantEmail => html! { <UpdateTenantEmailView /> },
        Route::Signin | Route::NotFound => Html::default(),
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Signin => html! { <SigninView /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
        protected => html! {
            <AuthProvider>
                <ProtectedRoute>
                    <Layout route={protected}>
                        { protected_view(protected) }
                    </Layout>
                </ProtectedRoute>
            </AuthProvider>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </HashRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_titles_follow_the_navigation_table() {
        assert_eq!(Route::Dashboard.title(), "Dashboard");
        assert_eq!(Route::Tenants.title(), "Tenants");
        assert_eq!(Route::Plans.title(), "Plans");
    }
}
