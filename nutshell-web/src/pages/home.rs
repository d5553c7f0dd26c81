use nutshell_core::Testimonial;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::testimonials::TestimonialStrip;
use crate::router::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    // The strip is decorative: it stays hidden until the fetch delivers,
    // and a failure simply leaves it hidden. No error state, no retry.
    let testimonials = use_state(Vec::<Testimonial>::new);

    {
        let testimonials = testimonials.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match api::fetch_testimonials().await {
                    Ok(list) => testimonials.set(list),
                    Err(err) => log::error!("testimonial fetch failed: {err}"),
                }
            });
            || {}
        });
    }

    let strip = html! { <TestimonialStrip testimonials={(*testimonials).clone()} /> };

    html! {
        <div class="max-w-5xl mx-auto px-4" data-testid="home-page">
            <section class="hero py-16">
                <div class="hero-content text-center flex-col gap-6">
                    <h1 class="text-4xl md:text-5xl font-bold">
                        { "Your shortcut through the entrance-exam maze" }
                    </h1>
                    <p class="max-w-xl opacity-80">
                        { "Courses that fit your goal, scholarship exams you can book \
                           online in minutes, and mentors on call whenever you get stuck." }
                    </p>
                    <div class="flex gap-3">
                        <Link<Route> to={Route::BookExam} classes="btn btn-primary">
                            { "Book an exam slot" }
                        </Link<Route>>
                        <Link<Route> to={Route::Courses} classes="btn btn-outline">
                            { "Browse courses" }
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="grid gap-4 sm:grid-cols-3 py-6">
                <div class="card bg-base-200">
                    <div class="card-body">
                        <h3 class="card-title text-base">{ "Flat, honest pricing" }</h3>
                        <p class="text-sm opacity-70">
                            { "Every exam shows its fee up front; checkout adds a flat ₹50 \
                               processing fee and nothing else." }
                        </p>
                    </div>
                </div>
                <div class="card bg-base-200">
                    <div class="card-body">
                        <h3 class="card-title text-base">{ "Live seat counts" }</h3>
                        <p class="text-sm opacity-70">
                            { "Slot availability updates straight from the exam calendar, \
                               so you never book a full date." }
                        </p>
                    </div>
                </div>
                <div class="card bg-base-200">
                    <div class="card-body">
                        <h3 class="card-title text-base">{ "AI mentor, always on" }</h3>
                        <p class="text-sm opacity-70">
                            { "The chat bubble in the corner answers questions about \
                               courses, exams and admissions round the clock." }
                        </p>
                    </div>
                </div>
            </section>

            { strip }
        </div>
    }
}
