use nutshell_core::FeeBreakdown;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PriceSummaryProps {
    pub exam_title: AttrValue,
    /// Exam fee in whole rupees; the fixed processing fee is added here.
    pub exam_fee: i64,
}

#[function_component(PriceSummary)]
pub fn price_summary(props: &PriceSummaryProps) -> Html {
    let fee = FeeBreakdown::for_exam(props.exam_fee);
    html! {
        <div class="card bg-base-200 border border-base-300" data-testid="price-summary">
            <div class="card-body gap-2 py-4">
                <h4 class="font-semibold text-sm uppercase opacity-60">{ "Price summary" }</h4>
                <div class="flex justify-between text-sm">
                    <span>{ format!("{} exam fee", props.exam_title) }</span>
                    <span>{ format!("₹{}", fee.exam_fee) }</span>
                </div>
                <div class="flex justify-between text-sm">
                    <span>{ "Processing fee" }</span>
                    <span>{ format!("₹{}", fee.processing_fee) }</span>
                </div>
                <div class="divider my-0"></div>
                <div class="flex justify-between font-bold" data-testid="price-total">
                    <span>{ "Total" }</span>
                    <span>{ format!("₹{}", fee.total) }</span>
                </div>
            </div>
        </div>
    }
}
