use nutshell_core::{
    BookingSession, LookupRequest, VerificationStatus, decide_next_route,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::dom;
use crate::router::Route;
use crate::session::LocalSession;

/// Delay between showing the approved panel and navigating on.
const APPROVED_REDIRECT_MS: u32 = 2_000;

/// The unified verify-details state machine. The original site shipped two
/// diverging copies of this screen; every branch now flows through
/// `decide_next_route`.
#[derive(Clone, PartialEq)]
enum LoginState {
    Unverified,
    Submitting,
    Pending,
    Approved,
    Error(String),
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let state = use_state(|| LoginState::Unverified);
    let email = use_state(String::new);
    let phone = use_state(String::new);

    let on_submit = {
        let state = state.clone();
        let email = email.clone();
        let phone = phone.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let req = LookupRequest {
                email: (*email).clone(),
                phone: (*phone).clone(),
            };
            let state = state.clone();
            let navigator = navigator.clone();
            state.set(LoginState::Submitting);
            spawn_local(async move {
                let store = LocalSession;
                // The token may legitimately be absent for first-time
                // visitors; the header is only attached when one exists.
                let session = BookingSession::load(&store);
                let result = api::lookup_student(&req, session.token.as_deref()).await;

                let resp = match result {
                    Ok(resp) => resp,
                    Err(err) => {
                        log::error!("student lookup failed: {err}");
                        state.set(LoginState::Error(err.user_message()));
                        return;
                    }
                };

                let status = resp
                    .status
                    .as_deref()
                    .map_or(VerificationStatus::Unknown, VerificationStatus::parse);
                match status {
                    VerificationStatus::Pending => {
                        // No caching, no navigation: the wait panel holds.
                        state.set(LoginState::Pending);
                    }
                    VerificationStatus::Approved => {
                        let Some(student) = resp.student else {
                            state.set(LoginState::Error(
                                "Your record looks approved but came back incomplete. \
                                 Please contact support."
                                    .to_string(),
                            ));
                            return;
                        };
                        if let Err(err) = BookingSession::save_student(&store, &student) {
                            log::error!("could not cache student record: {err}");
                        }
                        if let Some(token) = resp.token.as_deref() {
                            if let Err(err) = BookingSession::save_token(&store, token) {
                                log::error!("could not cache token: {err}");
                            }
                        }
                        state.set(LoginState::Approved);

                        let session = BookingSession::load(&store);
                        let target = decide_next_route(status, session.has_selection());
                        dom::sleep_ms(APPROVED_REDIRECT_MS).await;
                        if let (Some(nav), Some(target)) = (navigator, target) {
                            nav.push(&Route::from_flow(target));
                        }
                    }
                    VerificationStatus::Rejected | VerificationStatus::Unknown => {
                        let message = resp.message.unwrap_or_else(|| {
                            "We could not verify those details. Please check them or \
                             register first."
                                .to_string()
                        });
                        state.set(LoginState::Error(message));
                    }
                }
            });
        })
    };

    let body = match &*state {
        LoginState::Pending => pending_panel(),
        LoginState::Approved => approved_panel(),
        LoginState::Unverified | LoginState::Submitting | LoginState::Error(_) => {
            login_form(&state, &email, &phone, &on_submit)
        }
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-10 space-y-6" data-testid="login-page">
            <div>
                <h1 class="text-3xl font-bold">{ "Verify your details" }</h1>
                <p class="opacity-70 text-sm mt-1">
                    { "Enter the email and phone you registered with." }
                </p>
            </div>
            { body }
        </div>
    }
}

fn login_form(
    state: &UseStateHandle<LoginState>,
    email: &UseStateHandle<String>,
    phone: &UseStateHandle<String>,
    on_submit: &Callback<SubmitEvent>,
) -> Html {
    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };
    let submitting = matches!(&**state, LoginState::Submitting);
    html! {
        <>
            <form class="space-y-3" onsubmit={on_submit.clone()}>
                <input class="input input-bordered w-full" type="email" placeholder="Email"
                    required=true value={(**email).clone()} oninput={bind(email)}
                    data-testid="login-email" />
                <input class="input input-bordered w-full" type="tel" placeholder="Phone"
                    required=true value={(**phone).clone()} oninput={bind(phone)}
                    data-testid="login-phone" />
                if let LoginState::Error(msg) = &**state {
                    <p class="text-error text-sm" data-testid="login-error">{ msg.clone() }</p>
                }
                <button class="btn btn-primary btn-block" type="submit" disabled={submitting}>
                    { if submitting { "Checking…" } else { "Verify" } }
                </button>
            </form>
            <p class="text-sm opacity-70">
                { "New to EduNutshell? " }
                <Link<Route> to={Route::Verify} classes="link link-primary">
                    { "Register first" }
                </Link<Route>>
            </p>
        </>
    }
}

fn pending_panel() -> Html {
    html! {
        <div class="card bg-base-100 border border-warning" data-testid="login-pending">
            <div class="card-body items-center text-center gap-3">
                <span class="loading loading-ring loading-lg text-warning"></span>
                <h2 class="card-title">{ "Approval pending" }</h2>
                <p class="text-sm opacity-70">
                    { "Your registration is still under review. You will be able to book \
                       as soon as it is approved, usually within a day." }
                </p>
            </div>
        </div>
    }
}

fn approved_panel() -> Html {
    html! {
        <div class="card bg-base-100 border border-success" data-testid="login-approved">
            <div class="card-body items-center text-center gap-3">
                <div class="text-success text-4xl">{ "✓" }</div>
                <h2 class="card-title">{ "Verified" }</h2>
                <p class="text-sm opacity-70">{ "Taking you onward…" }</p>
            </div>
        </div>
    }
}
