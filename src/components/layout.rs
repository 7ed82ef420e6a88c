use yew::prelude::*;

use crate::app::Route;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub route: Route,
    pub children: Children,
}

/// Admin chrome: sidebar navigation plus a header titled after the route.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="layout">
            <Sidebar active={props.route} />
            <main class="layout-main">
                <Header route={props.route} />
                <div class="layout-content">
                    { props.children.clone() }
                </div>
            </main>
        </div>
    }
}
