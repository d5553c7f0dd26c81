//! Server-side render checks for full pages. Pages that navigate or use
//! `Link` need a router context, so everything renders inside a
//! memory-history router.

use futures::executor::block_on;
use nutshell_web::pages::{
    about::AboutPage, blogs::BlogsPage, checkout::CheckoutPage, courses::CoursesPage,
    faq::FaqPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    partners::PartnersPage, policies::PoliciesPage, slot_selection::SlotSelectionPage,
    verify::VerifyPage,
};
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq)]
struct WrapProps {
    inner: Html,
}

#[function_component(Wrap)]
fn wrap(props: &WrapProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! { <Router history={history}>{ props.inner.clone() }</Router> }
}

fn render(inner: Html) -> String {
    block_on(LocalServerRenderer::<Wrap>::with_props(WrapProps { inner }).render())
}

#[test]
fn home_page_renders_hero_and_ctas() {
    let html = render(html! { <HomePage /> });
    assert!(html.contains("entrance-exam maze"));
    assert!(html.contains("Book an exam slot"));
    assert!(html.contains("Browse courses"));
}

#[test]
fn home_testimonial_strip_stays_hidden_until_quotes_arrive() {
    // Before (or without) a successful fetch the list is empty, and an
    // empty strip renders nothing rather than a bare heading.
    let html = render(html! { <HomePage /> });
    assert!(!html.contains("testimonial-strip"));
    assert!(!html.contains("What our students say"));
}

#[test]
fn static_pages_render_their_content() {
    let about = render(html! { <AboutPage /> });
    assert!(about.contains("About EduNutshell"));

    let faq = render(html! { <FaqPage /> });
    assert!(faq.contains("Frequently asked questions"));
    assert!(faq.contains("processing fee"));

    let policies = render(html! { <PoliciesPage /> });
    assert!(policies.contains("Refunds"));
    assert!(policies.contains("non-refundable"));

    let partners = render(html! { <PartnersPage /> });
    assert!(partners.contains("Our partners"));

    let not_found = render(html! { <NotFoundPage /> });
    assert!(not_found.contains("404"));
}

#[test]
fn courses_page_starts_in_loading_state() {
    let html = render(html! { <CoursesPage /> });
    assert!(html.contains("courses-loading"));
}

#[test]
fn blogs_page_starts_in_loading_state() {
    let html = render(html! { <BlogsPage /> });
    assert!(html.contains("loading-spinner"));
}

#[test]
fn slot_selection_starts_loading_with_continue_disabled() {
    let html = render(html! { <SlotSelectionPage /> });
    assert!(html.contains("Book your exam slot"));
    assert!(html.contains("exams-loading"));
    // Nothing picked yet: Continue must not be actionable.
    assert!(html.contains("disabled"));
}

#[test]
fn verify_page_renders_registration_form() {
    let html = render(html! { <VerifyPage /> });
    assert!(html.contains("Register to book"));
    assert!(html.contains("register-name"));
    assert!(html.contains("register-program"));
    assert!(html.contains("Verify your details"));
}

#[test]
fn login_page_renders_lookup_form() {
    let html = render(html! { <LoginPage /> });
    assert!(html.contains("Verify your details"));
    assert!(html.contains("login-email"));
    assert!(html.contains("login-phone"));
    assert!(html.contains("Register first"));
}

#[test]
fn checkout_waits_for_the_session_read() {
    // The session is only read in the mount effect, which server-side
    // rendering never runs; the page must show its placeholder, not panic.
    let html = render(html! { <CheckoutPage /> });
    assert!(html.contains("checkout-loading"));
}
