use nutshell_core::Course;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, Remote};
use crate::router::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct CourseDetailProps {
    pub id: String,
}

#[function_component(CourseDetailPage)]
pub fn course_detail_page(props: &CourseDetailProps) -> Html {
    let course = use_state(|| Remote::<Course>::Loading);
    let attempt = use_state(|| 0_u32);

    {
        let course = course.clone();
        let id = props.id.clone();
        use_effect_with((id, *attempt), move |(id, _)| {
            let id = id.clone();
            course.set(Remote::Loading);
            spawn_local(async move {
                match api::fetch_course(&id).await {
                    Ok(found) => course.set(Remote::Ready(found)),
                    Err(err) => {
                        log::error!("course detail fetch failed: {err}");
                        course.set(Remote::Failed(err.user_message()));
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

    match &*course {
        Remote::Loading => html! {
            <div class="flex justify-center py-16">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        },
        Remote::Failed(msg) => html! {
            <div class="text-center py-16 space-y-4" data-testid="course-detail-error">
                <p class="text-error">{ msg.clone() }</p>
                <button class="btn btn-outline" onclick={retry}>{ "Retry" }</button>
            </div>
        },
        Remote::Ready(course) => html! {
            <div class="max-w-3xl mx-auto px-4 py-10 space-y-6" data-testid="course-detail-page">
                if !course.category.is_empty() {
                    <span class="badge badge-outline">{ &course.category }</span>
                }
                <h1 class="text-3xl font-bold">{ &course.title }</h1>
                <div class="flex gap-6 text-sm">
                    <span class="font-semibold">
                        { course.price.map_or_else(|| "Enquire for fees".to_string(), |p| format!("₹{p}")) }
                    </span>
                    if !course.duration.is_empty() {
                        <span class="opacity-60">{ &course.duration }</span>
                    }
                </div>
                <p class="opacity-80 whitespace-pre-line">{ &course.description }</p>
                <div class="flex gap-3">
                    <Link<Route> to={Route::BookExam} classes="btn btn-primary">
                        { "Book a scholarship exam" }
                    </Link<Route>>
                    <Link<Route> to={Route::Courses} classes="btn btn-ghost">
                        { "All courses" }
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
