use nutshell_core::BlogPost;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, Remote};
use crate::pages::blogs::take_blog_preview;
use crate::router::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct BlogDetailProps {
    pub id: String,
}

#[function_component(BlogDetailPage)]
pub fn blog_detail_page(props: &BlogDetailProps) -> Html {
    let post = use_state(|| Remote::<BlogPost>::Loading);
    let attempt = use_state(|| 0_u32);

    {
        let post = post.clone();
        let id = props.id.clone();
        use_effect_with((id, *attempt), move |(id, _)| {
            let id = id.clone();
            post.set(Remote::Loading);
            // The list page leaves the clicked post in session storage;
            // a missing, corrupt, or mismatched entry falls back to the API.
            if let Some(cached) = take_blog_preview(&id) {
                post.set(Remote::Ready(cached));
            } else {
                spawn_local(async move {
                    match api::fetch_blog(&id).await {
                        Ok(found) => post.set(Remote::Ready(found)),
                        Err(err) => {
                            log::error!("blog detail fetch failed: {err}");
                            post.set(Remote::Failed(err.user_message()));
                        }
                    }
                });
            }
            || {}
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    match &*post {
        Remote::Loading => html! {
            <div class="flex justify-center py-16">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        },
        Remote::Failed(msg) => html! {
            <div class="text-center py-16 space-y-4" data-testid="blog-detail-error">
                <p class="text-error">{ msg.clone() }</p>
                <button class="btn btn-outline" onclick={retry}>{ "Retry" }</button>
            </div>
        },
        Remote::Ready(found) => html! {
            <article class="max-w-3xl mx-auto px-4 py-10 space-y-4" data-testid="blog-detail-page">
                <h1 class="text-3xl font-bold">{ &found.title }</h1>
                <div class="text-sm opacity-60">
                    { &found.author }
                    if let Some(date) = &found.published_at {
                        { format!(" · {date}") }
                    }
                </div>
                <div class="prose opacity-90 whitespace-pre-line">{ &found.content }</div>
                <Link<Route> to={Route::Blogs} classes="btn btn-ghost btn-sm">
                    { "← All posts" }
                </Link<Route>>
            </article>
        },
    }
}
