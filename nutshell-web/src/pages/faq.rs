use yew::prelude::*;

const FAQS: &[(&str, &str)] = &[
    (
        "How do I book an exam slot?",
        "Open Book Exam Slot, pick an exam and an available date, then verify your \
         details. Dates marked Full cannot be selected.",
    ),
    (
        "What does the exam cost?",
        "Each exam shows its own fee; a flat ₹50 processing fee is added at checkout.",
    ),
    (
        "I registered but my status says pending. What now?",
        "Our team reviews new registrations within one working day. You will be able \
         to continue to checkout as soon as your record is approved.",
    ),
    (
        "Can I change my slot after booking?",
        "Yes. Use Book Another Slot from the confirmation screen, or write to our \
         counsellors through the enquiry form.",
    ),
    (
        "Do you offer scholarships?",
        "Top scorers in our scholarship exams receive fee waivers at partner \
         institutes. Details are shared with your result.",
    ),
];

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-4 py-10 space-y-4" data-testid="faq-page">
            <h1 class="text-3xl font-bold">{ "Frequently asked questions" }</h1>
            { for FAQS.iter().map(|(q, a)| html! {
                <details class="collapse collapse-arrow bg-base-200">
                    <summary class="collapse-title font-semibold">{ *q }</summary>
                    <div class="collapse-content text-sm opacity-80"><p>{ *a }</p></div>
                </details>
            }) }
        </div>
    }
}
