use nutshell_core::{
    BookingConfirmation, BookingSession, Exam, PaymentMethod, Slot,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking::{ConfirmationPanel, PriceSummary};
use crate::router::Route;
use crate::session::LocalSession;

/// Checkout renders entirely from the stored selection; it never refetches
/// exam or slot lists. Payment is simulated client-side: no booking call
/// is issued, and leaving the confirmation clears the selection.
#[function_component(CheckoutPage)]
pub fn checkout_page() -> Html {
    let navigator = use_navigator();
    // None until the mount effect has read the session.
    let selection = use_state(|| None::<(Exam, Slot)>);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let method = use_state(PaymentMethod::default);
    let form_error = use_state(|| None::<&'static str>);
    let confirmation = use_state(|| None::<BookingConfirmation>);

    {
        let selection = selection.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |()| {
            let session = BookingSession::load(&LocalSession);
            match (session.selected_exam, session.selected_slot) {
                (Some(exam), Some(slot)) => {
                    if let Some(student) = session.student {
                        name.set(student.name);
                        email.set(student.email);
                        phone.set(student.phone);
                    }
                    selection.set(Some((exam, slot)));
                }
                // No selection to check out: back to slot selection.
                _ => {
                    if let Some(nav) = navigator {
                        nav.push(&Route::BookExam);
                    }
                }
            }
            || {}
        });
    }

    let on_pay = {
        let selection = selection.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let method = method.clone();
        let form_error = form_error.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((exam, slot)) = &*selection else {
                return;
            };
            if name.trim().is_empty() || email.trim().is_empty() || phone.trim().is_empty() {
                form_error.set(Some("All student details are required."));
                return;
            }
            form_error.set(None);
            confirmation.set(Some(BookingConfirmation::assemble(
                name.trim(),
                exam,
                slot,
                *method,
            )));
        })
    };

    let exit = |target: Route, navigator: Option<Navigator>| {
        Callback::from(move |()| {
            BookingSession::clear_selection(&LocalSession);
            if let Some(nav) = navigator.clone() {
                nav.push(&target);
            }
        })
    };

    if let Some(conf) = &*confirmation {
        return html! {
            <div class="max-w-2xl mx-auto px-4 py-10" data-testid="checkout-page">
                <ConfirmationPanel
                    confirmation={conf.clone()}
                    on_book_another={exit(Route::BookExam, navigator.clone())}
                    on_home={exit(Route::Home, navigator)}
                />
            </div>
        };
    }

    let Some((exam, slot)) = &*selection else {
        return html! {
            <div class="flex justify-center py-16" data-testid="checkout-loading">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        };
    };

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let method_list = PaymentMethod::ALL.iter().map(|m| {
        let checked = *m == *method;
        let on_change = {
            let method = method.clone();
            let m = *m;
            Callback::from(move |_: Event| method.set(m))
        };
        html! {
            <label class="label cursor-pointer justify-start gap-3 border border-base-300 rounded px-3">
                <input type="radio" name="payment-method" class="radio radio-primary radio-sm"
                    checked={checked} onchange={on_change}
                    data-testid={format!("pay-method-{}", m.id())} />
                <span class="label-text">{ m.label() }</span>
            </label>
        }
    });

    html! {
        <div class="max-w-2xl mx-auto px-4 py-10 space-y-6" data-testid="checkout-page">
            <h1 class="text-3xl font-bold">{ "Checkout" }</h1>

            <div class="card bg-base-200">
                <div class="card-body py-4 gap-1">
                    <h2 class="font-semibold">{ &exam.title }</h2>
                    <p class="text-sm opacity-70" data-testid="checkout-date">
                        { format!("Exam date: {}", slot.display_date()) }
                    </p>
                </div>
            </div>

            <form class="space-y-4" onsubmit={on_pay}>
                <fieldset class="space-y-3">
                    <legend class="font-semibold text-sm uppercase opacity-60">
                        { "Student details" }
                    </legend>
                    <input class="input input-bordered w-full" type="text" placeholder="Full name"
                        required=true value={(*name).clone()} oninput={bind(&name)}
                        data-testid="checkout-name" />
                    <input class="input input-bordered w-full" type="email" placeholder="Email"
                        required=true value={(*email).clone()} oninput={bind(&email)}
                        data-testid="checkout-email" />
                    <input class="input input-bordered w-full" type="tel" placeholder="Phone"
                        required=true value={(*phone).clone()} oninput={bind(&phone)}
                        data-testid="checkout-phone" />
                </fieldset>

                <fieldset class="space-y-2">
                    <legend class="font-semibold text-sm uppercase opacity-60">
                        { "Payment method" }
                    </legend>
                    { for method_list }
                </fieldset>

                <PriceSummary exam_title={exam.title.clone()} exam_fee={exam.price} />

                if let Some(msg) = *form_error {
                    <p class="text-error text-sm" data-testid="checkout-form-error">{ msg }</p>
                }

                <button class="btn btn-primary btn-block" type="submit" data-testid="complete-payment">
                    { "Complete Payment" }
                </button>
            </form>
        </div>
    }
}
