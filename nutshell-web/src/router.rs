use nutshell_core::FlowTarget;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/courses")]
    Courses,
    #[at("/courses/:id")]
    CourseDetail { id: String },
    #[at("/blogs")]
    Blogs,
    #[at("/blogs/:id")]
    BlogDetail { id: String },
    #[at("/about")]
    About,
    #[at("/faq")]
    Faq,
    #[at("/policies")]
    Policies,
    #[at("/partners")]
    Partners,
    #[at("/book-exam")]
    BookExam,
    #[at("/booking/verify")]
    Verify,
    #[at("/booking/login")]
    Login,
    #[at("/booking/checkout")]
    Checkout,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Map a core flow decision onto a concrete route.
    #[must_use]
    pub const fn from_flow(target: FlowTarget) -> Self {
        match target {
            FlowTarget::Home => Self::Home,
            FlowTarget::SlotSelection => Self::BookExam,
            FlowTarget::Verification => Self::Login,
            FlowTarget::Checkout => Self::Checkout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use nutshell_core::FlowTarget;

    #[test]
    fn flow_targets_cover_every_booking_route() {
        assert_eq!(Route::from_flow(FlowTarget::Home), Route::Home);
        assert_eq!(Route::from_flow(FlowTarget::SlotSelection), Route::BookExam);
        assert_eq!(Route::from_flow(FlowTarget::Verification), Route::Login);
        assert_eq!(Route::from_flow(FlowTarget::Checkout), Route::Checkout);
    }

    #[test]
    fn route_paths_parse_back_to_routes() {
        use yew_router::Routable;
        assert_eq!(Route::recognize("/book-exam"), Some(Route::BookExam));
        assert_eq!(
            Route::recognize("/courses/c-12"),
            Some(Route::CourseDetail { id: "c-12".into() })
        );
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }
}
