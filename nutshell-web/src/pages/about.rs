use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-4 py-10 space-y-6" data-testid="about-page">
            <h1 class="text-3xl font-bold">{ "About EduNutshell" }</h1>
            <p class="opacity-80">
                { "EduNutshell helps school and college students find the right preparation \
                   path: structured courses, scholarship exams with transparent slot booking, \
                   and mentors who have walked the road before." }
            </p>
            <div class="grid gap-4 sm:grid-cols-3">
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <span class="text-3xl font-bold">{ "12k+" }</span>
                        <span class="text-sm opacity-70">{ "Students mentored" }</span>
                    </div>
                </div>
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <span class="text-3xl font-bold">{ "40+" }</span>
                        <span class="text-sm opacity-70">{ "Partner institutes" }</span>
                    </div>
                </div>
                <div class="card bg-base-200">
                    <div class="card-body items-center text-center">
                        <span class="text-3xl font-bold">{ "95%" }</span>
                        <span class="text-sm opacity-70">{ "Would recommend us" }</span>
                    </div>
                </div>
            </div>
            <p class="opacity-80">
                { "We started in 2021 as a two-person counselling desk and now run \
                   scholarship exams across three states. The exam fee stays flat and the \
                   booking process stays online, so no student needs to travel just to \
                   reserve a seat." }
            </p>
        </div>
    }
}
