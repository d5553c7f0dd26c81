use nutshell_core::EnquiryRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::session;

#[derive(Clone, PartialEq)]
enum EnquiryStatus {
    Editing,
    Sending,
    Sent,
    Failed(String),
}

/// Lead-capture popup. Shows once per tab session; a successful submit (or
/// an explicit dismiss) sets the session flag so it stays away.
#[function_component(EnquiryPopup)]
pub fn enquiry_popup() -> Html {
    let open = use_state(|| false);
    let status = use_state(|| EnquiryStatus::Editing);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);

    {
        let open = open.clone();
        use_effect_with((), move |()| {
            if !session::enquiry_popup_seen() {
                open.set(true);
            }
            || {}
        });
    }

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            session::mark_enquiry_popup_seen();
            open.set(false);
        })
    };

    let on_submit = {
        let status = status.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let req = EnquiryRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            let status = status.clone();
            status.set(EnquiryStatus::Sending);
            spawn_local(async move {
                match api::send_enquiry(&req).await {
                    Ok(()) => {
                        session::mark_enquiry_popup_seen();
                        status.set(EnquiryStatus::Sent);
                    }
                    Err(err) => {
                        log::error!("enquiry submit failed: {err}");
                        status.set(EnquiryStatus::Failed(err.user_message()));
                    }
                }
            });
        })
    };

    if !*open {
        return Html::default();
    }

    let body = match &*status {
        EnquiryStatus::Sent => html! {
            <div class="text-center space-y-2" data-testid="enquiry-thanks">
                <p class="font-semibold">{ "Thanks for reaching out!" }</p>
                <p class="text-sm opacity-70">{ "Our counsellors will call you back shortly." }</p>
                <button class="btn btn-primary btn-sm" onclick={on_close.clone()}>{ "Close" }</button>
            </div>
        },
        _ => enquiry_form(
            &name, &email, &phone, &message, &status, &on_submit,
        ),
    };

    html! {
        <div class="modal modal-open" role="dialog" data-testid="enquiry-popup">
            <div class="modal-box max-w-md">
                <button
                    class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2"
                    onclick={on_close}
                    aria-label="Close enquiry form"
                >
                    { "✕" }
                </button>
                <h3 class="font-bold text-lg mb-2">{ "Talk to a counsellor" }</h3>
                { body }
            </div>
        </div>
    }
}

fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

fn enquiry_form(
    name: &UseStateHandle<String>,
    email: &UseStateHandle<String>,
    phone: &UseStateHandle<String>,
    message: &UseStateHandle<String>,
    status: &UseStateHandle<EnquiryStatus>,
    on_submit: &Callback<SubmitEvent>,
) -> Html {
    let sending = matches!(&**status, EnquiryStatus::Sending);
    html! {
        <form class="space-y-3" onsubmit={on_submit.clone()}>
            <input class="input input-bordered w-full" type="text" placeholder="Name"
                required=true value={(**name).clone()} oninput={bind_input(name)} />
            <input class="input input-bordered w-full" type="email" placeholder="Email"
                required=true value={(**email).clone()} oninput={bind_input(email)} />
            <input class="input input-bordered w-full" type="tel" placeholder="Phone"
                required=true value={(**phone).clone()} oninput={bind_input(phone)} />
            <input class="input input-bordered w-full" type="text"
                placeholder="What would you like to know?"
                value={(**message).clone()} oninput={bind_input(message)} />
            if let EnquiryStatus::Failed(msg) = &**status {
                <p class="text-error text-sm" data-testid="enquiry-error">{ msg.clone() }</p>
            }
            <button class="btn btn-primary btn-block" type="submit" disabled={sending}>
                { if sending { "Sending…" } else { "Request a callback" } }
            </button>
        </form>
    }
}
