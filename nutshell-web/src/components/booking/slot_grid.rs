use nutshell_core::{Availability, Exam, Slot, availability};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SlotGridProps {
    pub exam: Exam,
    pub slots: Vec<Slot>,
    #[prop_or_default]
    pub selected_id: Option<AttrValue>,
    pub on_select: Callback<Slot>,
}

/// Calendar cells for one exam's bookable dates. Full cells are disabled
/// and never raise `on_select`, so a full slot cannot become the pick.
#[function_component(SlotGrid)]
pub fn slot_grid(props: &SlotGridProps) -> Html {
    html! {
        <div class="grid gap-3 grid-cols-2 sm:grid-cols-3 md:grid-cols-4" data-testid="slot-grid">
            { for props.slots.iter().map(|slot| slot_cell(slot, props)) }
        </div>
    }
}

const fn tier_badge_class(tier: Availability) -> &'static str {
    match tier {
        Availability::Full => "badge badge-error badge-sm",
        Availability::Limited => "badge badge-warning badge-sm",
        Availability::Available => "badge badge-success badge-sm",
    }
}

fn slot_cell(slot: &Slot, props: &SlotGridProps) -> Html {
    let tier = availability(&props.exam, slot);
    let is_full = tier.is_full();
    let is_selected = props
        .selected_id
        .as_ref()
        .is_some_and(|id| id.as_str() == slot.id);

    let cell_class = if is_full {
        "btn btn-block h-auto py-3 btn-disabled flex-col gap-1"
    } else if is_selected {
        "btn btn-block h-auto py-3 btn-primary flex-col gap-1"
    } else {
        "btn btn-block h-auto py-3 btn-outline flex-col gap-1"
    };

    let on_click = {
        let on_select = props.on_select.clone();
        let slot = slot.clone();
        Callback::from(move |_| {
            if !is_full {
                on_select.emit(slot.clone());
            }
        })
    };

    let seats_left = slot.available(&props.exam).max(0);
    html! {
        <button
            type="button"
            class={cell_class}
            disabled={is_full}
            onclick={on_click}
            data-testid={format!("slot-cell-{}", slot.id)}
        >
            <span class="font-semibold">{ slot.display_date() }</span>
            <span class={tier_badge_class(tier)}>{ tier.label() }</span>
            if !is_full {
                <span class="text-xs opacity-70">{ format!("{seats_left} left") }</span>
            }
        </button>
    }
}
