use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::enquiry_popup::EnquiryPopup;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, blog_detail::BlogDetailPage, blogs::BlogsPage, checkout::CheckoutPage,
    course_detail::CourseDetailPage, courses::CoursesPage, faq::FaqPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, partners::PartnersPage, policies::PoliciesPage,
    slot_selection::SlotSelectionPage, verify::VerifyPage,
};
use crate::router::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::CourseDetail { id } => html! { <CourseDetailPage {id} /> },
        Route::Blogs => html! { <BlogsPage /> },
        Route::BlogDetail { id } => html! { <BlogDetailPage {id} /> },
        Route::About => html! { <AboutPage /> },
        Route::Faq => html! { <FaqPage /> },
        Route::Policies => html! { <PoliciesPage /> },
        Route::Partners => html! { <PartnersPage /> },
        Route::BookExam => html! { <SlotSelectionPage /> },
        Route::Verify => html! { <VerifyPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Checkout => html! { <CheckoutPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <main id="main" role="main" class="min-h-screen bg-base-100">
                <Switch<Route> render={switch} />
            </main>
            <EnquiryPopup />
            <ChatWidget />
            <Footer />
        </BrowserRouter>
    }
}
