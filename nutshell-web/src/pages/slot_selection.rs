use nutshell_core::{BookingSession, Exam, Slot, continue_target};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, Remote};
use crate::components::booking::{ExamPicker, PriceSummary, SlotGrid};
use crate::router::Route;
use crate::session::LocalSession;

/// First screen of the booking wizard: pick an exam, then a date.
///
/// The slot list is a dependent second fetch keyed on the chosen exam.
/// Continue persists the selection and routes through the core flow
/// decision: verification for first-time visitors, checkout otherwise.
#[function_component(SlotSelectionPage)]
pub fn slot_selection_page() -> Html {
    let navigator = use_navigator();
    let exams = use_state(|| Remote::<Vec<Exam>>::Loading);
    let exam_attempt = use_state(|| 0_u32);
    let selected_exam = use_state(|| None::<Exam>);
    let slots = use_state(|| Remote::<Vec<Slot>>::Loading);
    let slot_attempt = use_state(|| 0_u32);
    let selected_slot = use_state(|| None::<Slot>);

    {
        let exams = exams.clone();
        use_effect_with(*exam_attempt, move |_| {
            exams.set(Remote::Loading);
            spawn_local(async move {
                match api::fetch_exams().await {
                    Ok(list) => exams.set(Remote::Ready(list)),
                    Err(err) => {
                        log::error!("exam fetch failed: {err}");
                        exams.set(Remote::Failed(err.user_message()));
                    }
                }
            });
            || {}
        });
    }

    {
        let slots = slots.clone();
        let exam_id = selected_exam.as_ref().map(|e| e.id.clone());
        use_effect_with((exam_id, *slot_attempt), move |(exam_id, _)| {
            if let Some(id) = exam_id.clone() {
                slots.set(Remote::Loading);
                spawn_local(async move {
                    match api::fetch_slots(&id).await {
                        Ok(list) => slots.set(Remote::Ready(list)),
                        Err(err) => {
                            log::error!("slot fetch failed: {err}");
                            slots.set(Remote::Failed(err.user_message()));
                        }
                    }
                });
            }
            || {}
        });
    }

    let on_select_exam = {
        let selected_exam = selected_exam.clone();
        let selected_slot = selected_slot.clone();
        Callback::from(move |exam: Exam| {
            // Re-picking the exam resets any held slot choice.
            selected_slot.set(None);
            selected_exam.set(Some(exam));
        })
    };

    let on_select_slot = {
        let selected_slot = selected_slot.clone();
        Callback::from(move |slot: Slot| selected_slot.set(Some(slot)))
    };

    let on_continue = {
        let selected_exam = selected_exam.clone();
        let selected_slot = selected_slot.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(exam), Some(slot)) = ((*selected_exam).clone(), (*selected_slot).clone())
            else {
                return;
            };
            let store = LocalSession;
            if let Err(err) = BookingSession::save_selection(&store, &exam, &slot) {
                log::error!("could not persist selection: {err}");
                return;
            }
            let session = BookingSession::load(&store);
            let target = continue_target(&session);
            if let Some(nav) = navigator.clone() {
                nav.push(&Route::from_flow(target));
            }
        })
    };

    let retry_exams = {
        let exam_attempt = exam_attempt.clone();
        Callback::from(move |_| exam_attempt.set(*exam_attempt + 1))
    };
    let retry_slots = {
        let slot_attempt = slot_attempt.clone();
        Callback::from(move |_| slot_attempt.set(*slot_attempt + 1))
    };

    let exam_section = match &*exams {
        Remote::Loading => html! {
            <div class="flex justify-center py-12">
                <span class="loading loading-spinner loading-lg" data-testid="exams-loading"></span>
            </div>
        },
        Remote::Failed(msg) => html! {
            <div class="text-center py-12 space-y-4" data-testid="exams-error">
                <p class="text-error">{ msg.clone() }</p>
                <button class="btn btn-outline" onclick={retry_exams} data-testid="exams-retry">
                    { "Retry" }
                </button>
            </div>
        },
        Remote::Ready(list) if list.is_empty() => html! {
            <p class="text-center py-12 opacity-70" data-testid="exams-empty">
                { "No exams are open for booking right now." }
            </p>
        },
        Remote::Ready(list) => html! {
            <ExamPicker
                exams={list.clone()}
                selected_id={selected_exam.as_ref().map(|e| AttrValue::from(e.id.clone()))}
                on_select={on_select_exam}
            />
        },
    };

    let slot_section = selected_exam.as_ref().map_or_else(Html::default, |exam| {
        let grid = match &*slots {
            Remote::Loading => html! {
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner" data-testid="slots-loading"></span>
                </div>
            },
            Remote::Failed(msg) => html! {
                <div class="text-center py-8 space-y-4" data-testid="slots-error">
                    <p class="text-error">{ msg.clone() }</p>
                    <button class="btn btn-outline btn-sm" onclick={retry_slots} data-testid="slots-retry">
                        { "Retry" }
                    </button>
                </div>
            },
            Remote::Ready(list) if list.is_empty() => html! {
                <p class="text-center py-8 opacity-70" data-testid="slots-empty">
                    { "No dates are scheduled for this exam yet." }
                </p>
            },
            Remote::Ready(list) => html! {
                <SlotGrid
                    exam={exam.clone()}
                    slots={list.clone()}
                    selected_id={selected_slot.as_ref().map(|s| AttrValue::from(s.id.clone()))}
                    on_select={on_select_slot.clone()}
                />
            },
        };
        html! {
            <section class="space-y-4">
                <h2 class="text-xl font-semibold">{ format!("Pick a date for {}", exam.title) }</h2>
                { grid }
            </section>
        }
    });

    let summary = match (selected_exam.as_ref(), selected_slot.as_ref()) {
        (Some(exam), Some(_)) => html! {
            <PriceSummary exam_title={exam.title.clone()} exam_fee={exam.price} />
        },
        _ => Html::default(),
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-10 space-y-8" data-testid="slot-selection-page">
            <div>
                <h1 class="text-3xl font-bold">{ "Book your exam slot" }</h1>
                <p class="opacity-70 text-sm mt-1">
                    { "Choose an exam, pick an available date, and continue to checkout." }
                </p>
            </div>
            { exam_section }
            { slot_section }
            { summary }
            <button
                class="btn btn-primary btn-wide"
                disabled={selected_slot.is_none()}
                onclick={on_continue}
                data-testid="continue-booking"
            >
                { "Continue" }
            </button>
        </div>
    }
}
