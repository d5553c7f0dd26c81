use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center bg-base-200 text-base-content p-8 gap-4">
            <nav class="grid grid-flow-col gap-4" aria-label="Footer">
                <Link<Route> to={Route::About} classes="link link-hover">{ "About us" }</Link<Route>>
                <Link<Route> to={Route::Policies} classes="link link-hover">{ "Policies" }</Link<Route>>
                <Link<Route> to={Route::Faq} classes="link link-hover">{ "FAQ" }</Link<Route>>
                <Link<Route> to={Route::Partners} classes="link link-hover">{ "Partners" }</Link<Route>>
            </nav>
            <aside>
                <p class="text-sm opacity-70">{ "© 2026 EduNutshell. All rights reserved." }</p>
            </aside>
        </footer>
    }
}
