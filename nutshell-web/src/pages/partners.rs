use yew::prelude::*;

const PARTNERS: &[(&str, &str)] = &[
    ("Meridian Institute of Technology", "Engineering pathways"),
    ("Sunrise Medical Academy", "NEET coaching"),
    ("Cascade Junior Colleges", "Integrated +2 programs"),
    ("Lumen Learning Labs", "Foundation courses"),
    ("Northfield Career School", "Commerce and law"),
    ("Vertex Olympiad Circle", "Olympiad training"),
];

#[function_component(PartnersPage)]
pub fn partners_page() -> Html {
    html! {
        <div class="max-w-4xl mx-auto px-4 py-10 space-y-6" data-testid="partners-page">
            <h1 class="text-3xl font-bold">{ "Our partners" }</h1>
            <p class="opacity-80">
                { "Scholarship-exam toppers earn fee waivers and priority admission at \
                   these partner institutes." }
            </p>
            <div class="grid gap-4 sm:grid-cols-2 md:grid-cols-3">
                { for PARTNERS.iter().map(|(name, line)| html! {
                    <div class="card bg-base-100 border border-base-300">
                        <div class="card-body gap-1">
                            <h3 class="font-semibold">{ *name }</h3>
                            <p class="text-sm opacity-60">{ *line }</p>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
