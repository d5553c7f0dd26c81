use nutshell_core::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::router::Route;

const PROGRAMS: &[&str] = &["NEET", "JEE", "Foundation", "Commerce", "Other"];

#[derive(Clone, PartialEq)]
enum RegistrationStatus {
    Editing,
    Submitting,
    Done,
    Failed(String),
}

/// New-student registration. A successful submit swaps the form for a
/// static "what happens next" panel; there is no status polling.
#[function_component(VerifyPage)]
pub fn verify_page() -> Html {
    let status = use_state(|| RegistrationStatus::Editing);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let program = use_state(|| PROGRAMS[0].to_string());

    let on_submit = {
        let status = status.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let program = program.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let req = RegisterRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                program: (*program).clone(),
            };
            let status = status.clone();
            status.set(RegistrationStatus::Submitting);
            spawn_local(async move {
                match api::register_student(&req).await {
                    Ok(_) => status.set(RegistrationStatus::Done),
                    Err(err) => {
                        log::error!("registration failed: {err}");
                        status.set(RegistrationStatus::Failed(err.user_message()));
                    }
                }
            });
        })
    };

    if matches!(&*status, RegistrationStatus::Done) {
        return next_steps_panel();
    }

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_program_change = {
        let program = program.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                program.set(select.value());
            }
        })
    };

    let submitting = matches!(&*status, RegistrationStatus::Submitting);

    html! {
        <div class="max-w-md mx-auto px-4 py-10 space-y-6" data-testid="verify-page">
            <div>
                <h1 class="text-3xl font-bold">{ "Register to book" }</h1>
                <p class="opacity-70 text-sm mt-1">
                    { "First time here? Register once and our team will verify your details." }
                </p>
            </div>
            <form class="space-y-3" onsubmit={on_submit}>
                <input class="input input-bordered w-full" type="text" placeholder="Full name"
                    required=true value={(*name).clone()} oninput={bind(&name)}
                    data-testid="register-name" />
                <input class="input input-bordered w-full" type="email" placeholder="Email"
                    required=true value={(*email).clone()} oninput={bind(&email)}
                    data-testid="register-email" />
                <input class="input input-bordered w-full" type="tel" placeholder="Phone"
                    required=true value={(*phone).clone()} oninput={bind(&phone)}
                    data-testid="register-phone" />
                <select class="select select-bordered w-full" onchange={on_program_change}
                    data-testid="register-program">
                    { for PROGRAMS.iter().map(|p| html! {
                        <option value={*p} selected={*p == program.as_str()}>{ *p }</option>
                    }) }
                </select>
                if let RegistrationStatus::Failed(msg) = &*status {
                    <p class="text-error text-sm" data-testid="register-error">{ msg.clone() }</p>
                }
                <button class="btn btn-primary btn-block" type="submit" disabled={submitting}>
                    { if submitting { "Submitting…" } else { "Register" } }
                </button>
            </form>
            <p class="text-sm opacity-70">
                { "Already registered? " }
                <Link<Route> to={Route::Login} classes="link link-primary">
                    { "Verify your details" }
                </Link<Route>>
            </p>
        </div>
    }
}

fn next_steps_panel() -> Html {
    html! {
        <div class="max-w-md mx-auto px-4 py-10" data-testid="register-done">
            <div class="card bg-base-100 border border-base-300">
                <div class="card-body gap-4">
                    <h2 class="card-title">{ "Registration received" }</h2>
                    <ul class="steps steps-vertical">
                        <li class="step step-primary">{ "We review your details" }</li>
                        <li class="step">{ "You get an approval email, usually within a day" }</li>
                        <li class="step">{ "Come back, verify your details, and finish booking" }</li>
                    </ul>
                    <Link<Route> to={Route::Login} classes="btn btn-outline">
                        { "Already approved? Verify now" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
