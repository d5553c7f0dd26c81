use nutshell_core::{ChatRole, ChatTurn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

const GREETING: &str = "Hi! I'm your AI mentor. Ask me anything about courses, exams or admissions.";

/// Floating "AI mentor" chat. Turns live only in component state; each
/// send proxies to the remote chatbot endpoint.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let open = use_state(|| false);
    let turns = use_state(|| vec![ChatTurn::mentor(GREETING)]);
    let draft = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };

    let send = {
        let turns = turns.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let text = draft.trim().to_string();
            if text.is_empty() || *busy {
                return;
            }
            let mut next = (*turns).clone();
            next.push(ChatTurn::student(text.clone()));
            turns.set(next.clone());
            draft.set(String::new());
            error.set(None);
            busy.set(true);

            let turns = turns.clone();
            let busy = busy.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::send_chat(&text).await {
                    Ok(reply) => {
                        next.push(ChatTurn::mentor(reply));
                        turns.set(next);
                    }
                    Err(err) => {
                        log::error!("chat request failed: {err}");
                        error.set(Some(err.user_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_submit = {
        let send = send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(());
        })
    };

    let panel = if *open {
        chat_panel(&turns, &draft, *busy, &error, &on_input, &on_submit)
    } else {
        Html::default()
    };

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col items-end gap-2" data-testid="chat-widget">
            { panel }
            <button class="btn btn-circle btn-primary shadow-lg" onclick={toggle}
                aria-label="Toggle AI mentor chat" data-testid="chat-toggle">
                { if *open { "✕" } else { "💬" } }
            </button>
        </div>
    }
}

fn chat_panel(
    turns: &UseStateHandle<Vec<ChatTurn>>,
    draft: &UseStateHandle<String>,
    busy: bool,
    error: &UseStateHandle<Option<String>>,
    on_input: &Callback<InputEvent>,
    on_submit: &Callback<SubmitEvent>,
) -> Html {
    html! {
        <div class="card bg-base-100 border border-base-300 shadow-xl w-80" data-testid="chat-panel">
            <div class="card-body p-4 gap-3">
                <h3 class="font-bold">{ "AI Mentor" }</h3>
                <div class="h-64 overflow-y-auto space-y-2">
                    { for turns.iter().map(chat_bubble) }
                    if busy {
                        <div class="chat chat-start">
                            <div class="chat-bubble chat-bubble-neutral">
                                <span class="loading loading-dots loading-sm"></span>
                            </div>
                        </div>
                    }
                </div>
                if let Some(msg) = &**error {
                    <p class="text-error text-xs" data-testid="chat-error">{ msg.clone() }</p>
                }
                <form class="join w-full" onsubmit={on_submit.clone()}>
                    <input class="input input-bordered input-sm join-item flex-1" type="text"
                        placeholder="Ask a question…"
                        value={(**draft).clone()}
                        oninput={on_input.clone()}
                        data-testid="chat-input" />
                    <button class="btn btn-primary btn-sm join-item" type="submit" disabled={busy}>
                        { "Send" }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn chat_bubble(turn: &ChatTurn) -> Html {
    let (wrap, bubble) = match turn.role {
        ChatRole::Student => ("chat chat-end", "chat-bubble chat-bubble-primary"),
        ChatRole::Mentor => ("chat chat-start", "chat-bubble"),
    };
    html! {
        <div class={wrap}>
            <div class={bubble}>{ &turn.text }</div>
        </div>
    }
}
