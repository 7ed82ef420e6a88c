use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::context::use_toasts;
use crate::hooks::{producer, use_fetch};
use crate::models::{Limits, Plan, PlanDraft};
use crate::services::plan_service;
use crate::utils::{confirm, format_currency_dzd, format_date};

#[derive(Clone, PartialEq)]
enum PlanModalState {
    Create,
    Edit(Plan),
}

#[derive(Properties, PartialEq)]
struct PlanFormProps {
    /// Existing plan when editing, None when creating.
    pub plan: Option<Plan>,
    pub on_submit: Callback<PlanDraft>,
    pub on_close: Callback<()>,
}

#[function_component(PlanForm)]
fn plan_form(props: &PlanFormProps) -> Html {
    let name_ref = use_node_ref();
    let price_ref = use_node_ref();
    let currency_ref = use_node_ref();
    let active_ref = use_node_ref();
    let students_ref = use_node_ref();
    let users_ref = use_node_ref();
    let classes_ref = use_node_ref();
    let categories_ref = use_node_ref();

    let value_of = |node: &NodeRef| {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let name_ref = name_ref.clone();
        let price_ref = price_ref.clone();
        let currency_ref = currency_ref.clone();
        let active_ref = active_ref.clone();
        let students_ref = students_ref.clone();
        let users_ref = users_ref.clone();
        let classes_ref = classes_ref.clone();
        let categories_ref = categories_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let draft = PlanDraft {
                name: value_of(&name_ref),
                price: value_of(&price_ref).parse().unwrap_or(0.0),
                currency: {
                    let currency = value_of(&currency_ref);
                    if currency.is_empty() {
                        "DZD".to_string()
                    } else {
                        currency
                    }
                },
                is_active: active_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.checked())
                    .unwrap_or(false),
                limits: Limits {
                    students: value_of(&students_ref).parse().unwrap_or(0),
                    users: value_of(&users_ref).parse().unwrap_or(0),
                    classes: value_of(&classes_ref).parse().unwrap_or(0),
                    categories: value_of(&categories_ref).parse().unwrap_or(0),
                },
            };
            if draft.name.is_empty() {
                return;
            }
            on_submit.emit(draft);
        })
    };

    let plan = props.plan.as_ref();
    let title = if plan.is_some() { "Edit Plan" } else { "Add Plan" };
    let limits = plan.map(|plan| plan.limits).unwrap_or_default();

    html! {
        <Modal title={title} on_close={props.on_close.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{ "Name" }</label>
                    <input ref={name_ref}
                        value={plan.map(|plan| plan.name.clone()).unwrap_or_default()}
                        required=true />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{ "Price" }</label>
                        <input ref={price_ref} type="number" step="0.01" min="0"
                            value={plan.map(|plan| plan.price.to_string()).unwrap_or_default()} />
                    </div>
                    <div class="form-group">
                        <label>{ "Currency" }</label>
                        <input ref={currency_ref}
                            value={plan.map(|plan| plan.currency.clone()).unwrap_or_else(|| "DZD".into())} />
                    </div>
                </div>
                <div class="form-group form-checkbox">
                    <label>
                        <input ref={active_ref} type="checkbox"
                            checked={plan.map(|plan| plan.is_active).unwrap_or(true)} />
                        { "Active" }
                    </label>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{ "Students" }</label>
                        <input ref={students_ref} type="number" min="0"
                            value={limits.students.to_string()} />
                    </div>
                    <div class="form-group">
                        <label>{ "Users" }</label>
                        <input ref={users_ref} type="number" min="0"
                            value={limits.users.to_string()} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{ "Classes" }</label>
                        <input ref={classes_ref} type="number" min="0"
                            value={limits.classes.to_string()} />
                    </div>
                    <div class="form-group">
                        <label>{ "Categories" }</label>
                        <input ref={categories_ref} type="number" min="0"
                            value={limits.categories.to_string()} />
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}>{ "Cancel" }</button>
                    <button type="submit" class="btn btn-primary">{ "Save Plan" }</button>
                </div>
            </form>
        </Modal>
    }
}

#[function_component(PlansView)]
pub fn plans_view() -> Html {
    let plans = use_fetch::<Vec<Plan>>(Some(producer(|| plan_service::fetch_plans())));
    let modal = use_state(|| None::<PlanModalState>);
    let toasts = use_toasts();

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let on_submit = {
        let modal_state = (*modal).clone();
        let modal = modal.clone();
        let refetch = plans.refetch.clone();
        let toasts = toasts.clone();
        Callback::from(move |draft: PlanDraft| {
            modal.set(None);
            let refetch = refetch.clone();
            let toasts = toasts.clone();
            let editing = match &modal_state {
                Some(PlanModalState::Edit(plan)) => Some(plan.id.clone()),
                _ => None,
            };
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &editing {
                    Some(id) => plan_service::update_plan(id, &draft).await.map(|_| ()),
                    None => plan_service::create_plan(&draft).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toasts.success(if editing.is_some() {
                            "The plan updated successfully"
                        } else {
                            "Adding successfully!"
                        });
                        refetch.emit(None);
                    }
                    Err(err) => toasts.error(err.message),
                }
            });
        })
    };

    let on_delete = {
        let refetch = plans.refetch.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            if !confirm(
                "Are you sure you want to delete the selected plan? This action cannot be undone.",
            ) {
                return;
            }
            let refetch = refetch.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match plan_service::delete_plan(&id).await {
                    Ok(()) => {
                        toasts.success("The plan deleted successfully");
                        refetch.emit(None);
                    }
                    // No refetch on failure; the list stays as fetched.
                    Err(err) => toasts.error(err.message),
                }
            });
        })
    };

    let state = &*plans.state;
    if state.loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="plans">
            <div class="view-header">
                <div>
                    <h1>{ "Subscription Plans" }</h1>
                    <p class="card-description">{ "Manage your subscription plans and pricing" }</p>
                </div>
                <button class="btn btn-primary" onclick={{
                    let modal = modal.clone();
                    Callback::from(move |_: MouseEvent| modal.set(Some(PlanModalState::Create)))
                }}>{ "+ Add Plan" }</button>
            </div>

            if let Some(error) = &state.error {
                <p class="form-error">{ &error.message }</p>
            }

            <div class="plan-grid">
                { for state.data.iter().map(|plan| {
                    let edit = {
                        let modal = modal.clone();
                        let plan = plan.clone();
                        Callback::from(move |_: MouseEvent| {
                            modal.set(Some(PlanModalState::Edit(plan.clone())))
                        })
                    };
                    let delete = {
                        let on_delete = on_delete.clone();
                        let id = plan.id.clone();
                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                    };
                    html! {
                        <div class="card plan-card" key={plan.id.clone()}>
                            <div class="plan-card-header">
                                <h3>{ &plan.name }</h3>
                                <span class={if plan.is_active { "badge badge-active" } else { "badge" }}>
                                    { if plan.is_active { "Active" } else { "Inactive" } }
                                </span>
                            </div>
                            if let Some(created) = &plan.created_at {
                                <p class="card-description">{ format!("Created: {}", format_date(created)) }</p>
                            }
                            <div class="plan-price">{ format_currency_dzd(Some(plan.price)) }</div>
                            <ul class="plan-limits">
                                <li>{ format!("Students: {}", plan.limits.students) }</li>
                                <li>{ format!("Users: {}", plan.limits.users) }</li>
                                <li>{ format!("Classes: {}", plan.limits.classes) }</li>
                                <li>{ format!("Categories: {}", plan.limits.categories) }</li>
                            </ul>
                            <div class="plan-actions">
                                <button class="btn btn-sm" onclick={edit}>{ "Edit" }</button>
                                <button class="btn btn-sm btn-danger" onclick={delete}>{ "Delete" }</button>
                            </div>
                        </div>
                    }
                }) }
            </div>

            if state.data.is_empty() && state.error.is_none() {
                <div class="card empty-state">
                    <h3>{ "No plans found" }</h3>
                    <p>{ "Get started by creating your first subscription plan" }</p>
                </div>
            }

            if let Some(modal_state) = &*modal {
                <PlanForm
                    plan={match modal_state {
                        PlanModalState::Edit(plan) => Some(plan.clone()),
                        PlanModalState::Create => None,
                    }}
                    on_submit={on_submit.clone()}
                    on_close={close_modal.clone()}
                />
            }
        </div>
    }
}
