// ============================================================================
// SIGN-IN VIEW - credentials phase, then OTP challenge when required
// ============================================================================
// A `twoFactorRequired` response switches phases without navigation and
// keeps the credentials for the second submission. Success returns the
// operator to the page the guard redirected them from, default "/".
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::protected_route::RedirectQuery;
use crate::models::{SigninPhase, SigninRequest};
use crate::services::auth_service;

#[function_component(SigninView)]
pub fn signin_view() -> Html {
    let phase = use_state(|| SigninPhase::Credentials);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    // Credentials retained between the two phases.
    let credentials = use_state(|| (String::new(), String::new()));

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let otp_ref = use_node_ref();

    let navigator = use_navigator();
    let location = use_location();

    // Where the guard sent us from, when it did.
    let destination = location
        .as_ref()
        .and_then(|location| location.query::<RedirectQuery>().ok())
        .map(|query| query.from)
        .filter(|from| !from.is_empty())
        .and_then(|from| Route::recognize(&from))
        .unwrap_or(Route::Dashboard);

    let on_submit = {
        let phase = phase.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let credentials = credentials.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let otp_ref = otp_ref.clone();
        let navigator = navigator.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            error.set(None);

            let request = match *phase {
                SigninPhase::Credentials => {
                    let email = email_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default();
                    let password = password_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default();
                    if email.is_empty() || password.is_empty() {
                        error.set(Some("Email and password are required".to_string()));
                        return;
                    }
                    credentials.set((email.clone(), password.clone()));
                    SigninRequest {
                        email,
                        password,
                        otp: None,
                    }
                }
                SigninPhase::Otp => {
                    let otp = otp_ref
                        .cast::<HtmlInputElement>()
                        .map(|input| input.value())
                        .unwrap_or_default();
                    let (email, password) = (*credentials).clone();
                    SigninRequest {
                        email,
                        password,
                        otp: Some(otp),
                    }
                }
            };

            let phase = phase.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            let destination = destination;
            let submitted_phase = *phase;

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::signin(&request).await {
                    Ok(response)
                        if submitted_phase == SigninPhase::Credentials
                            && response.two_factor_required =>
                    {
                        phase.set(SigninPhase::after_credentials(true));
                    }
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&destination);
                        }
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="signin-screen">
            <div class="signin-logo">{ "Rawda Admin" }</div>
            <div class="card signin-card">
                <h2>{ "Sign In" }</h2>
                <p class="card-description">{ "Enter your credentials to access your account" }</p>

                <form class="signin-form" onsubmit={on_submit}>
                    if let Some(message) = &*error {
                        <p class="form-error">{ message }</p>
                    }

                    if *phase == SigninPhase::Credentials {
                        <div class="form-group">
                            <label for="email">{ "Email" }</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Enter your email"
                                ref={email_ref}
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">{ "Password" }</label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Enter your password"
                                ref={password_ref}
                                required=true
                            />
                        </div>
                    } else {
                        <p class="otp-hint">{ "Enter the 6-digit code from your authenticator app." }</p>
                        <div class="form-group">
                            <label for="otp">{ "One-Time Password (OTP)" }</label>
                            <input
                                id="otp"
                                type="text"
                                inputmode="numeric"
                                maxlength="6"
                                placeholder="000000"
                                ref={otp_ref}
                                required=true
                            />
                        </div>
                    }

                    <button class="btn btn-primary btn-block" type="submit" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
