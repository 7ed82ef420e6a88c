use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_toasts;
use crate::models::UpdateEmailPayload;
use crate::services::tenant_service;

/// Support tool: move a tenant account to a new email address.
#[function_component(UpdateTenantEmailView)]
pub fn update_tenant_email_view() -> Html {
    let old_email_ref = use_node_ref();
    let new_email_ref = use_node_ref();
    let submitting = use_state(|| false);
    let message = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let toasts = use_toasts();

    let on_submit = {
        let old_email_ref = old_email_ref.clone();
        let new_email_ref = new_email_ref.clone();
        let submitting = submitting.clone();
        let message = message.clone();
        let error = error.clone();
        let toasts = toasts.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let payload = UpdateEmailPayload {
                old_email: value_of(&old_email_ref),
                new_email: value_of(&new_email_ref),
            };
            if payload.old_email.is_empty() || payload.new_email.is_empty() {
                error.set(Some("Both email addresses are required".into()));
                return;
            }
            if payload.old_email == payload.new_email {
                error.set(Some("The new email must differ from the current one".into()));
                return;
            }

            submitting.set(true);
            message.set(None);
            error.set(None);

            let submitting = submitting.clone();
            let message = message.clone();
            let error = error.clone();
            let toasts = toasts.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match tenant_service::update_email(&payload).await {
                    Ok(response) => {
                        toasts.success("Email updated successfully");
                        message.set(Some(if response.message.is_empty() {
                            "Email updated successfully".into()
                        } else {
                            response.message
                        }));
                    }
                    Err(err) => {
                        toasts.error(err.message.clone());
                        error.set(Some(err.message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="card form-card">
            <h1>{ "Update Tenant Email" }</h1>
            <p class="card-description">
                { "Change the email address a tenant signs in with" }
            </p>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label>{ "Current Email" }</label>
                    <input ref={old_email_ref} type="email" placeholder="current@example.com" required=true />
                </div>
                <div class="form-group">
                    <label>{ "New Email" }</label>
                    <input ref={new_email_ref} type="email" placeholder="new@example.com" required=true />
                </div>
                if let Some(text) = &*message {
                    <p class="form-success">{ text }</p>
                }
                if let Some(text) = &*error {
                    <p class="form-error">{ text }</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Updating..." } else { "Update Email" } }
                </button>
            </form>
        </div>
    }
}
