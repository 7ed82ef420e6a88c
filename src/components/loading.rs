use yew::prelude::*;

/// Full-area loading placeholder, shown while the session bootstraps or a
/// whole view loads.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="spinner" />
            <p>{ "Loading..." }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingRowProps {
    pub colspan: u32,
}

/// Table-row placeholder while a list fetch is in flight.
#[function_component(LoadingRow)]
pub fn loading_row(props: &LoadingRowProps) -> Html {
    html! {
        <tr class="loading-row">
            <td colspan={props.colspan.to_string()}>
                <div class="spinner spinner-small" />
                { "Loading..." }
            </td>
        </tr>
    }
}
