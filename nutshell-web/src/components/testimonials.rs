use nutshell_core::Testimonial;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TestimonialStripProps {
    pub testimonials: Vec<Testimonial>,
}

/// Horizontal strip of student quotes; renders nothing when the list is
/// empty so the home page never shows a bare heading.
#[function_component(TestimonialStrip)]
pub fn testimonial_strip(props: &TestimonialStripProps) -> Html {
    if props.testimonials.is_empty() {
        return Html::default();
    }
    html! {
        <section class="py-10" data-testid="testimonial-strip">
            <h2 class="text-2xl font-bold text-center mb-6">{ "What our students say" }</h2>
            <div class="grid gap-4 md:grid-cols-3">
                { for props.testimonials.iter().map(testimonial_card) }
            </div>
        </section>
    }
}

fn testimonial_card(t: &Testimonial) -> Html {
    let stars = "★".repeat(usize::from(t.rating.clamp(1, 5)));
    html! {
        <figure class="card bg-base-100 border border-base-300">
            <div class="card-body gap-2">
                <span class="text-warning" aria-label={format!("{} out of 5 stars", t.rating)}>
                    { stars }
                </span>
                <blockquote class="text-sm italic">{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
                <figcaption class="text-sm font-semibold">
                    { &t.name }
                    if !t.role.is_empty() {
                        <span class="font-normal opacity-60">{ format!(" — {}", t.role) }</span>
                    }
                </figcaption>
            </div>
        </figure>
    }
}
