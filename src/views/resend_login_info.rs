use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::use_toasts;
use crate::services::tenant_service;

/// Support tool: resend a tenant's credentials mail to its registered email.
#[function_component(ResendLoginInfoView)]
pub fn resend_login_info_view() -> Html {
    let email_ref = use_node_ref();
    let submitting = use_state(|| false);
    let message = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let toasts = use_toasts();

    let on_submit = {
        let email_ref = email_ref.clone();
        let submitting = submitting.clone();
        let message = message.clone();
        let error = error.clone();
        let toasts = toasts.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            if email.is_empty() {
                error.set(Some("Please enter an email address".into()));
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
                match tenant_service::resend_login_info(&email).await {
                    Ok(response) => {
                        toasts.success("Login info sent successfully");
                        message.set(Some(if response.message.is_empty() {
                            "Login info sent successfully".into()
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
            <h1>{ "Resend Login Info" }</h1>
            <p class="card-description">
                { "Send a tenant their login credentials again by email" }
            </p>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label>{ "Tenant Email" }</label>
                    <input ref={email_ref} type="email" placeholder="tenant@example.com" required=true />
                </div>
                if let Some(text) = &*message {
                    <p class="form-success">{ text }</p>
                }
                if let Some(text) = &*error {
                    <p class="form-error">{ text }</p>
                }
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Sending..." } else { "Send Login Info" } }
                </button>
            </form>
        </div>
    }
}
