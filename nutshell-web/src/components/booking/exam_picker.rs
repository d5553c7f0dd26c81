use nutshell_core::Exam;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ExamPickerProps {
    pub exams: Vec<Exam>,
    #[prop_or_default]
    pub selected_id: Option<AttrValue>,
    pub on_select: Callback<Exam>,
}

#[function_component(ExamPicker)]
pub fn exam_picker(props: &ExamPickerProps) -> Html {
    html! {
        <div class="grid gap-4 sm:grid-cols-2" data-testid="exam-picker">
            { for props.exams.iter().map(|exam| exam_card(exam, props)) }
        </div>
    }
}

// A real button, so picking an exam works from the keyboard too.
fn exam_card(exam: &Exam, props: &ExamPickerProps) -> Html {
    let is_selected = props
        .selected_id
        .as_ref()
        .is_some_and(|id| id.as_str() == exam.id);
    let card_class = if is_selected {
        "card text-left w-full bg-base-100 border-2 border-primary shadow-md"
    } else {
        "card text-left w-full bg-base-100 border border-base-300 hover:border-primary"
    };
    let on_click = {
        let on_select = props.on_select.clone();
        let exam = exam.clone();
        Callback::from(move |_| on_select.emit(exam.clone()))
    };
    html! {
        <button
            type="button"
            class={card_class}
            onclick={on_click}
            data-testid={format!("exam-card-{}", exam.id)}
        >
            <div class="card-body gap-2">
                <h3 class="card-title text-lg">{ &exam.title }</h3>
                if !exam.description.is_empty() {
                    <p class="text-sm opacity-70">{ &exam.description }</p>
                }
                <div class="flex justify-between text-sm">
                    <span class="font-semibold">{ format!("₹{}", exam.price) }</span>
                    <span class="opacity-60">
                        { format!("{} seats per day", exam.total_slots_per_day) }
                    </span>
                </div>
            </div>
        </button>
    }
}
