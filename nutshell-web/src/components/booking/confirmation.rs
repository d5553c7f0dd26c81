use nutshell_core::BookingConfirmation;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmationPanelProps {
    pub confirmation: BookingConfirmation,
    pub on_book_another: Callback<()>,
    pub on_home: Callback<()>,
}

/// Post-payment summary. The payment is simulated client-side; no booking
/// record exists on the backend, which is why the wording stays at
/// "reserved" rather than promising a server receipt.
#[function_component(ConfirmationPanel)]
pub fn confirmation_panel(props: &ConfirmationPanelProps) -> Html {
    let conf = &props.confirmation;
    let book_another = {
        let cb = props.on_book_another.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let go_home = {
        let cb = props.on_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="card bg-base-100 border border-success max-w-lg mx-auto" data-testid="booking-confirmation">
            <div class="card-body items-center text-center gap-3">
                <div class="text-success text-4xl">{ "✓" }</div>
                <h2 class="card-title">{ "Booking Confirmed" }</h2>
                <p class="text-sm opacity-70">
                    { format!("Your seat for {} is reserved.", conf.exam_title) }
                </p>
                <div class="w-full text-left text-sm space-y-1 bg-base-200 rounded p-4">
                    <p><span class="font-semibold">{ "Student: " }</span>{ &conf.student_name }</p>
                    <p data-testid="confirmation-date">
                        <span class="font-semibold">{ "Exam date: " }</span>{ &conf.slot_date }
                    </p>
                    <p><span class="font-semibold">{ "Payment: " }</span>{ conf.method.label() }</p>
                    <p data-testid="confirmation-paid">
                        <span class="font-semibold">{ "Paid — " }</span>{ format!("₹{}", conf.fee.total) }
                    </p>
                </div>
                <div class="card-actions flex-col w-full gap-2">
                    <button class="btn btn-primary btn-block" onclick={book_another} data-testid="book-another">
                        { "Book Another Slot" }
                    </button>
                    <button class="btn btn-ghost btn-block" onclick={go_home} data-testid="go-home">
                        { "Go to Home" }
                    </button>
                </div>
            </div>
        </div>
    }
}
