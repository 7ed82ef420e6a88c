// ============================================================================
// TENANTS - filtered tenant table with add/edit/change-plan/delete
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::loading::LoadingRow;
use crate::components::modal::Modal;
use crate::components::status_badge::StatusBadge;
use crate::hooks::{producer, use_fetch, use_tenant_list};
use crate::models::{
    ChangePlanPayload, Limits, Plan, StatusFilter, Tenant, TenantDraft, TenantFilter,
    TenantStatus,
};
use crate::services::plan_service;
use crate::utils::{
    confirm, date_input_value, format_currency_dzd, format_date, RowEmphasis,
};

const TABLE_COLUMNS: u32 = 8;

fn status_from_value(value: &str) -> TenantStatus {
    match value {
        "trial" => TenantStatus::Trial,
        "suspended" => TenantStatus::Suspended,
        _ => TenantStatus::Active,
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Clone, PartialEq)]
enum TenantModal {
    Add,
    Edit(Tenant),
    ChangePlan(Tenant),
}

// ----------------------------------------------------------------------------
// Add/edit form
// ----------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
struct TenantFormProps {
    pub tenant: Option<Tenant>,
    pub on_submit: Callback<TenantDraft>,
    pub on_close: Callback<()>,
}

#[function_component(TenantForm)]
fn tenant_form(props: &TenantFormProps) -> Html {
    let name_ref = use_node_ref();
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let status_ref = use_node_ref();
    let amount_ref = use_node_ref();
    let end_ref = use_node_ref();
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
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let status_ref = status_ref.clone();
        let amount_ref = amount_ref.clone();
        let end_ref = end_ref.clone();
        let students_ref = students_ref.clone();
        let users_ref = users_ref.clone();
        let classes_ref = classes_ref.clone();
        let categories_ref = categories_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let status = status_ref
                .cast::<HtmlSelectElement>()
                .map(|select| status_from_value(&select.value()))
                .unwrap_or(TenantStatus::Active);
            let draft = TenantDraft {
                name: value_of(&name_ref),
                username: value_of(&username_ref),
                email: value_of(&email_ref),
                phone: none_if_empty(value_of(&phone_ref)),
                status,
                amount: value_of(&amount_ref).parse().ok(),
                end_subscription: none_if_empty(value_of(&end_ref)),
                limits: Limits {
                    students: value_of(&students_ref).parse().unwrap_or(0),
                    users: value_of(&users_ref).parse().unwrap_or(0),
                    classes: value_of(&classes_ref).parse().unwrap_or(0),
                    categories: value_of(&categories_ref).parse().unwrap_or(0),
                },
            };
            if draft.name.is_empty() || draft.username.is_empty() || draft.email.is_empty() {
                return;
            }
            on_submit.emit(draft);
        })
    };

    let tenant = props.tenant.as_ref();
    let title = if tenant.is_some() { "Edit Tenant" } else { "Add Tenant" };
    let limits = tenant.map(|tenant| tenant.limits).unwrap_or_default();
    let status = tenant.map(|tenant| tenant.status).unwrap_or(TenantStatus::Trial);

    html! {
        <Modal title={title} on_close={props.on_close.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-row">
                    <div class="form-group">
                        <label>{ "Name" }</label>
                        <input ref={name_ref}
                            value={tenant.map(|tenant| tenant.name.clone()).unwrap_or_default()}
                            required=true />
                    </div>
                    <div class="form-group">
                        <label>{ "Username" }</label>
                        <input ref={username_ref}
                            value={tenant.map(|tenant| tenant.username.clone()).unwrap_or_default()}
                            required=true />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{ "Email" }</label>
                        <input ref={email_ref} type="email"
                            value={tenant.map(|tenant| tenant.email.clone()).unwrap_or_default()}
                            required=true />
                    </div>
                    <div class="form-group">
                        <label>{ "Phone" }</label>
                        <input ref={phone_ref}
                            value={tenant.and_then(|tenant| tenant.phone.clone()).unwrap_or_default()} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{ "Status" }</label>
                        <select ref={status_ref}>
                            <option value="active" selected={status == TenantStatus::Active}>{ "Active" }</option>
                            <option value="trial" selected={status == TenantStatus::Trial}>{ "Trial" }</option>
                            <option value="suspended" selected={status == TenantStatus::Suspended}>{ "Suspended" }</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{ "Amount" }</label>
                        <input ref={amount_ref} type="number" step="0.01" min="0"
                            value={tenant
                                .and_then(|tenant| tenant.amount)
                                .map(|amount| amount.to_string())
                                .unwrap_or_default()} />
                    </div>
                </div>
                <div class="form-group">
                    <label>{ "Subscription End" }</label>
                    <input ref={end_ref} type="date"
                        value={tenant
                            .and_then(|tenant| tenant.end_subscription.as_deref())
                            .map(date_input_value)
                            .unwrap_or_default()} />
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
                    <button type="submit" class="btn btn-primary">{ "Save Tenant" }</button>
                </div>
            </form>
        </Modal>
    }
}

// ----------------------------------------------------------------------------
// Change-plan form
// ----------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
struct ChangePlanFormProps {
    pub tenant: Tenant,
    pub plans: Vec<Plan>,
    pub on_submit: Callback<ChangePlanPayload>,
    pub on_close: Callback<()>,
}

#[function_component(ChangePlanForm)]
fn change_plan_form(props: &ChangePlanFormProps) -> Html {
    let plan_ref = use_node_ref();
    let status_ref = use_node_ref();
    let note_ref = use_node_ref();

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let plan_ref = plan_ref.clone();
        let status_ref = status_ref.clone();
        let note_ref = note_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let new_plan_id = plan_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            if new_plan_id.is_empty() {
                return;
            }
            let status = status_ref
                .cast::<HtmlSelectElement>()
                .map(|select| status_from_value(&select.value()))
                .unwrap_or(TenantStatus::Active);
            let note = note_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .and_then(none_if_empty);
            on_submit.emit(ChangePlanPayload {
                new_plan_id,
                status,
                note,
            });
        })
    };

    let current_plan = props.tenant.plan.as_ref().map(|plan| plan.id.clone());

    html! {
        <Modal title={format!("Change Plan: {}", props.tenant.name)} on_close={props.on_close.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{ "Plan" }</label>
                    <select ref={plan_ref}>
                        <option value="" selected={current_plan.is_none()}>{ "Select a plan" }</option>
                        { for props.plans.iter().map(|plan| html! {
                            <option value={plan.id.clone()}
                                selected={current_plan.as_deref() == Some(plan.id.as_str())}>
                                { format!("{} ({})", plan.name, format_currency_dzd(Some(plan.price))) }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label>{ "Status" }</label>
                    <select ref={status_ref}>
                        <option value="active" selected={props.tenant.status == TenantStatus::Active}>{ "Active" }</option>
                        <option value="trial" selected={props.tenant.status == TenantStatus::Trial}>{ "Trial" }</option>
                        <option value="suspended" selected={props.tenant.status == TenantStatus::Suspended}>{ "Suspended" }</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>{ "Note" }</label>
                    <input ref={note_ref} placeholder="Optional note" />
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}>{ "Cancel" }</button>
                    <button type="submit" class="btn btn-primary">{ "Change Plan" }</button>
                </div>
            </form>
        </Modal>
    }
}

// ----------------------------------------------------------------------------
// View
// ----------------------------------------------------------------------------

#[function_component(TenantsView)]
pub fn tenants_view() -> Html {
    let list = use_tenant_list();
    let plans = use_fetch::<Vec<Plan>>(Some(producer(|| plan_service::fetch_plans())));
    let modal = use_state(|| None::<TenantModal>);

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let on_status_change = {
        let set_filter = list.set_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                set_filter.emit(TenantFilter::Status(StatusFilter::from_str(&select.value())));
            }
        })
    };

    let on_start_date_change = {
        let set_filter = list.set_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set_filter.emit(TenantFilter::StartDate(input.value()));
            }
        })
    };

    let on_end_date_change = {
        let set_filter = list.set_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set_filter.emit(TenantFilter::EndDate(input.value()));
            }
        })
    };

    let on_form_submit = {
        let modal_state = (*modal).clone();
        let modal = modal.clone();
        let create = list.create.clone();
        let update = list.update.clone();
        Callback::from(move |draft: TenantDraft| {
            match &modal_state {
                Some(TenantModal::Edit(tenant)) => update.emit((tenant.id.clone(), draft)),
                _ => create.emit(draft),
            }
            modal.set(None);
        })
    };

    let on_change_plan_submit = {
        let modal_state = (*modal).clone();
        let modal = modal.clone();
        let change_plan = list.change_plan.clone();
        Callback::from(move |payload: ChangePlanPayload| {
            if let Some(TenantModal::ChangePlan(tenant)) = &modal_state {
                change_plan.emit((tenant.id.clone(), payload));
            }
            modal.set(None);
        })
    };

    let on_delete = {
        let delete = list.delete.clone();
        Callback::from(move |id: String| {
            if confirm(
                "Are you sure you want to delete the selected tenant? This action cannot be undone.",
            ) {
                delete.emit(id);
            }
        })
    };

    let query = &*list.query;
    let state = &*list.tenants.state;
    let pagination = &state.data.pagination;

    html! {
        <div class="tenants">
            <div class="view-header">
                <div>
                    <h1>{ "Tenants" }</h1>
                    <p class="card-description">{ "Manage kindergarten accounts and subscriptions" }</p>
                </div>
                <button class="btn btn-primary" onclick={{
                    let modal = modal.clone();
                    Callback::from(move |_: MouseEvent| modal.set(Some(TenantModal::Add)))
                }}>{ "+ Add Tenant" }</button>
            </div>

            <div class="card filter-bar">
                <div class="form-group">
                    <label>{ "Status" }</label>
                    <select onchange={on_status_change}>
                        <option value="all" selected={query.status == StatusFilter::All}>{ "All" }</option>
                        <option value="active" selected={query.status == StatusFilter::Active}>{ "Active" }</option>
                        <option value="trial" selected={query.status == StatusFilter::Trial}>{ "Trial" }</option>
                        <option value="suspended" selected={query.status == StatusFilter::Suspended}>{ "Suspended" }</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>{ "Start Date" }</label>
                    <input type="date" value={query.start_date.clone()} onchange={on_start_date_change} />
                </div>
                <div class="form-group">
                    <label>{ "End Date" }</label>
                    <input type="date" value={query.end_date.clone()} onchange={on_end_date_change} />
                </div>
                <button class="btn" onclick={list.reset_filters.reform(|_: MouseEvent| ())}>
                    { "Reset Filters" }
                </button>
            </div>

            if let Some(error) = &state.error {
                <p class="form-error">{ &error.message }</p>
            }

            <div class="card table-card">
                <table class="tenant-table">
                    <thead>
                        <tr>
                            <th>{ "User Info" }</th>
                            <th>{ "Contact" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Plan" }</th>
                            <th>{ "Price" }</th>
                            <th>{ "Subscription Period" }</th>
                            <th>{ "Limits" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        if state.loading {
                            <LoadingRow colspan={TABLE_COLUMNS} />
                        } else if state.data.data.is_empty() {
                            <tr>
                                <td colspan={TABLE_COLUMNS.to_string()} class="empty-cell">
                                    { "No tenants found" }
                                </td>
                            </tr>
                        } else {
                            { for state.data.data.iter().map(|tenant| {
                                let emphasis = RowEmphasis::evaluate(
                                    tenant.status,
                                    tenant.end_subscription.as_deref(),
                                );
                                let edit = {
                                    let modal = modal.clone();
                                    let tenant = tenant.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        modal.set(Some(TenantModal::Edit(tenant.clone())))
                                    })
                                };
                                let change_plan = {
                                    let modal = modal.clone();
                                    let tenant = tenant.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        modal.set(Some(TenantModal::ChangePlan(tenant.clone())))
                                    })
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = tenant.id.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <tr key={tenant.id.clone()} class={emphasis.row_class()}>
                                        <td>
                                            <div class="cell-primary">{ &tenant.name }</div>
                                            <div class="cell-secondary">{ &tenant.username }</div>
                                        </td>
                                        <td>
                                            <div class="cell-primary">{ &tenant.email }</div>
                                            <div class="cell-secondary">
                                                { tenant.phone.as_deref().unwrap_or("-") }
                                            </div>
                                        </td>
                                        <td><StatusBadge status={tenant.status} /></td>
                                        <td>
                                            { tenant.plan.as_ref()
                                                .map(|plan| plan.name.clone())
                                                .unwrap_or_else(|| "Not selected".into()) }
                                        </td>
                                        <td>{ format_currency_dzd(tenant.amount) }</td>
                                        <td>
                                            <div class="cell-primary">
                                                { tenant.start_subscription.as_deref()
                                                    .map(format_date)
                                                    .unwrap_or_else(|| "-".into()) }
                                            </div>
                                            <div class="cell-secondary">
                                                { tenant.end_subscription.as_deref()
                                                    .map(format_date)
                                                    .unwrap_or_else(|| "-".into()) }
                                            </div>
                                        </td>
                                        <td>
                                            { format!(
                                                "{} / {} / {} / {}",
                                                tenant.limits.students,
                                                tenant.limits.users,
                                                tenant.limits.classes,
                                                tenant.limits.categories,
                                            ) }
                                        </td>
                                        <td class="cell-actions">
                                            <button class="btn btn-sm" onclick={edit}>{ "Edit" }</button>
                                            <button class="btn btn-sm" onclick={change_plan}>{ "Plan" }</button>
                                            <button class="btn btn-sm btn-danger" onclick={delete}>{ "Delete" }</button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        }
                    </tbody>
                </table>

                <div class="pagination">
                    <button class="btn btn-sm"
                        disabled={query.page <= 1 || state.loading}
                        onclick={{
                            let set_page = list.set_page.clone();
                            let page = query.page;
                            Callback::from(move |_: MouseEvent| set_page.emit(page.saturating_sub(1)))
                        }}>{ "Previous" }</button>
                    <span class="pagination-label">
                        { format!("Page {} of {}", pagination.page.max(1), pagination.total_pages.max(1)) }
                    </span>
                    <button class="btn btn-sm"
                        disabled={query.page >= pagination.total_pages.max(1) || state.loading}
                        onclick={{
                            let set_page = list.set_page.clone();
                            let page = query.page;
                            Callback::from(move |_: MouseEvent| set_page.emit(page + 1))
                        }}>{ "Next" }</button>
                </div>
            </div>

            if let Some(modal_state) = &*modal {
                { match modal_state {
                    TenantModal::Add => html! {
                        <TenantForm tenant={None::<Tenant>}
                            on_submit={on_form_submit.clone()}
                            on_close={close_modal.clone()} />
                    },
                    TenantModal::Edit(tenant) => html! {
                        <TenantForm tenant={Some(tenant.clone())}
                            on_submit={on_form_submit.clone()}
                            on_close={close_modal.clone()} />
                    },
                    TenantModal::ChangePlan(tenant) => html! {
                        <ChangePlanForm tenant={tenant.clone()}
                            plans={plans.state.data.clone()}
                            on_submit={on_change_plan_submit.clone()}
                            on_close={close_modal.clone()} />
                    },
                } }
            }
        </div>
    }
}
