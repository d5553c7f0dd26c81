use gloo::storage::{SessionStorage, Storage};
use nutshell_core::BlogPost;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, Remote};
use crate::router::Route;

/// Session key carrying the clicked post to the detail page so it renders
/// without a second fetch. The detail page treats a malformed or mismatched
/// entry as absent and falls back to the API.
pub const BLOG_PREVIEW_KEY: &str = "blogPreview";

pub fn cache_blog_preview(post: &BlogPost) {
    if let Err(err) = SessionStorage::set(BLOG_PREVIEW_KEY, post) {
        log::warn!("could not cache blog preview: {err}");
    }
}

#[must_use]
pub fn take_blog_preview(blog_id: &str) -> Option<BlogPost> {
    let post: BlogPost = SessionStorage::get(BLOG_PREVIEW_KEY).ok()?;
    (post.id == blog_id).then_some(post)
}

#[function_component(BlogsPage)]
pub fn blogs_page() -> Html {
    let blogs = use_state(|| Remote::<Vec<BlogPost>>::Loading);
    let attempt = use_state(|| 0_u32);
    let navigator = use_navigator();

    {
        let blogs = blogs.clone();
        use_effect_with(*attempt, move |_| {
            blogs.set(Remote::Loading);
            spawn_local(async move {
                match api::fetch_blogs().await {
                    Ok(list) => blogs.set(Remote::Ready(list)),
                    Err(err) => {
                        log::error!("blog fetch failed: {err}");
                        blogs.set(Remote::Failed(err.user_message()));
                    }
                }
            });
            || {}
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    let open_post = {
        Callback::from(move |post: BlogPost| {
            cache_blog_preview(&post);
            if let Some(nav) = navigator.clone() {
                nav.push(&Route::BlogDetail { id: post.id });
            }
        })
    };

    let body = match &*blogs {
        Remote::Loading => html! {
            <div class="flex justify-center py-16">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        },
        Remote::Failed(msg) => html! {
            <div class="text-center py-16 space-y-4" data-testid="blogs-error">
                <p class="text-error">{ msg.clone() }</p>
                <button class="btn btn-outline" onclick={retry}>{ "Retry" }</button>
            </div>
        },
        Remote::Ready(list) if list.is_empty() => html! {
            <p class="text-center py-16 opacity-70" data-testid="blogs-empty">
                { "No posts yet." }
            </p>
        },
        Remote::Ready(list) => html! {
            <div class="space-y-4">
                { for list.iter().map(|post| blog_row(post, &open_post)) }
            </div>
        },
    };

    html! {
        <div class="max-w-3xl mx-auto px-4 py-10 space-y-6" data-testid="blogs-page">
            <h1 class="text-3xl font-bold">{ "Blog" }</h1>
            { body }
        </div>
    }
}

fn blog_row(post: &BlogPost, open_post: &Callback<BlogPost>) -> Html {
    let on_click = {
        let open_post = open_post.clone();
        let post = post.clone();
        Callback::from(move |_| open_post.emit(post.clone()))
    };
    html! {
        <article
            class="card bg-base-100 border border-base-300 hover:shadow-md cursor-pointer"
            onclick={on_click}
            data-testid={format!("blog-row-{}", post.id)}
        >
            <div class="card-body gap-1">
                <h2 class="card-title text-lg">{ &post.title }</h2>
                if !post.summary.is_empty() {
                    <p class="text-sm opacity-70">{ &post.summary }</p>
                }
                <div class="text-xs opacity-50">
                    { &post.author }
                    if let Some(date) = &post.published_at {
                        { format!(" · {date}") }
                    }
                </div>
            </div>
        </article>
    }
}
