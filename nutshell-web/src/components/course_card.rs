use crate::router::Route;
use nutshell_core::Course;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;
    let price = course
        .price
        .map_or_else(|| "Enquire for fees".to_string(), |p| format!("₹{p}"));
    html! {
        <div class="card bg-base-100 border border-base-300 hover:shadow-md" data-testid={format!("course-card-{}", course.id)}>
            <div class="card-body gap-2">
                if !course.category.is_empty() {
                    <span class="badge badge-outline badge-sm">{ &course.category }</span>
                }
                <h3 class="card-title text-lg">{ &course.title }</h3>
                if !course.description.is_empty() {
                    <p class="text-sm opacity-70">{ &course.description }</p>
                }
                <div class="flex justify-between items-center text-sm">
                    <span class="font-semibold">{ price }</span>
                    if !course.duration.is_empty() {
                        <span class="opacity-60">{ &course.duration }</span>
                    }
                </div>
                <div class="card-actions justify-end">
                    <Link<Route>
                        to={Route::CourseDetail { id: course.id.clone() }}
                        classes="btn btn-sm btn-outline"
                    >
                        { "View details" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
