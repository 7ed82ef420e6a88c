use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub sub_label: AttrValue,
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    if props.loading {
        return html! {
            <div class="card stat-card">
                <div class="skeleton skeleton-line" />
                <div class="skeleton skeleton-value" />
                <div class="skeleton skeleton-line" />
            </div>
        };
    }

    html! {
        <div class="card stat-card">
            <div class="stat-title">{ &props.title }</div>
            <div class="stat-value">{ &props.value }</div>
            <div class="stat-sublabel">{ &props.sub_label }</div>
        </div>
    }
}
