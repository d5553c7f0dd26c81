use nutshell_core::Course;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, Remote};
use crate::components::course_card::CourseCard;

#[function_component(CoursesPage)]
pub fn courses_page() -> Html {
    let courses = use_state(|| Remote::<Vec<Course>>::Loading);
    let attempt = use_state(|| 0_u32);

    {
        let courses = courses.clone();
        use_effect_with(*attempt, move |_| {
            courses.set(Remote::Loading);
            spawn_local(async move {
                match api::fetch_courses().await {
                    Ok(list) => courses.set(Remote::Ready(list)),
                    Err(err) => {
                        log::error!("course fetch failed: {err}");
                        courses.set(Remote::Failed(err.user_message()));
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

    let body = match &*courses {
        Remote::Loading => html! {
            <div class="flex justify-center py-16">
                <span class="loading loading-spinner loading-lg" data-testid="courses-loading"></span>
            </div>
        },
        Remote::Failed(msg) => html! {
            <div class="text-center py-16 space-y-4" data-testid="courses-error">
                <p class="text-error">{ msg.clone() }</p>
                <button class="btn btn-outline" onclick={retry} data-testid="courses-retry">
                    { "Retry" }
                </button>
            </div>
        },
        Remote::Ready(list) if list.is_empty() => html! {
            <p class="text-center py-16 opacity-70" data-testid="courses-empty">
                { "No courses are listed right now. Check back soon." }
            </p>
        },
        Remote::Ready(list) => html! {
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                { for list.iter().map(|course| html! {
                    <CourseCard course={course.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-10 space-y-6" data-testid="courses-page">
            <h1 class="text-3xl font-bold">{ "Courses" }</h1>
            { body }
        </div>
    }
}
