use yew::prelude::*;

#[function_component(PoliciesPage)]
pub fn policies_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-4 py-10 space-y-8" data-testid="policies-page">
            <h1 class="text-3xl font-bold">{ "Policies" }</h1>

            <section class="space-y-2">
                <h2 class="text-xl font-semibold">{ "Privacy" }</h2>
                <p class="text-sm opacity-80">
                    { "We collect only the details needed to register you for an exam or \
                       course: name, email, phone and chosen program. Details are shared \
                       with partner institutes only after you enroll with them." }
                </p>
            </section>

            <section class="space-y-2">
                <h2 class="text-xl font-semibold">{ "Refunds" }</h2>
                <p class="text-sm opacity-80">
                    { "Exam fees are refundable up to 48 hours before your booked slot. \
                       The ₹50 processing fee is non-refundable. Refunds are issued to \
                       the original payment method within 7 working days." }
                </p>
            </section>

            <section class="space-y-2">
                <h2 class="text-xl font-semibold">{ "Terms of use" }</h2>
                <p class="text-sm opacity-80">
                    { "Slot bookings are personal and non-transferable. Carrying someone \
                       else's hall ticket, or booking with details that do not match a \
                       valid ID, voids the booking without refund." }
                </p>
            </section>
        </div>
    }
}
