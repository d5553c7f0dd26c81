use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="navbar bg-base-100 border-b border-base-300 sticky top-0 z-40" role="banner">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl font-bold normal-case">
                    { "EduNutshell" }
                </Link<Route>>
            </div>
            <nav class="navbar-center hidden md:flex" aria-label="Primary">
                <ul class="menu menu-horizontal px-1">
                    <li><Link<Route> to={Route::Courses}>{ "Courses" }</Link<Route>></li>
                    <li><Link<Route> to={Route::Blogs}>{ "Blog" }</Link<Route>></li>
                    <li><Link<Route> to={Route::About}>{ "About" }</Link<Route>></li>
                    <li><Link<Route> to={Route::Faq}>{ "FAQ" }</Link<Route>></li>
                    <li><Link<Route> to={Route::Partners}>{ "Partners" }</Link<Route>></li>
                </ul>
            </nav>
            <div class="navbar-end">
                <Link<Route> to={Route::BookExam} classes="btn btn-primary btn-sm" >
                    { "Book Exam Slot" }
                </Link<Route>>
            </div>
        </header>
    }
}
