use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-[50vh] flex flex-col items-center justify-center gap-4" data-testid="not-found-page">
            <h1 class="text-5xl font-bold">{ "404" }</h1>
            <p class="opacity-70">{ "That page does not exist." }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Back to home" }</Link<Route>>
        </div>
    }
}
