//! Server-side render checks for the prop-driven booking widgets.

use chrono::NaiveDate;
use futures::executor::block_on;
use nutshell_core::{BookingConfirmation, Exam, PaymentMethod, Slot};
use nutshell_web::components::booking::confirmation::{ConfirmationPanel, ConfirmationPanelProps};
use nutshell_web::components::booking::exam_picker::{ExamPicker, ExamPickerProps};
use nutshell_web::components::booking::price_summary::{PriceSummary, PriceSummaryProps};
use nutshell_web::components::booking::slot_grid::{SlotGrid, SlotGridProps};
use yew::{Callback, LocalServerRenderer};

fn exam(total: i32) -> Exam {
    Exam {
        id: "ex-1".into(),
        title: "Scholarship Test".into(),
        description: "State-wide scholarship exam".into(),
        price: 500,
        total_slots_per_day: total,
        created_at: None,
        updated_at: None,
    }
}

fn slot(id: &str, day: u32, booked: i32) -> Slot {
    Slot {
        id: id.into(),
        exam_id: "ex-1".into(),
        date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        booked_count: booked,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn slot_grid_bands_and_disables_cells() {
    let props = SlotGridProps {
        exam: exam(10),
        slots: vec![slot("full", 1, 10), slot("lim", 2, 8), slot("open", 3, 2)],
        selected_id: None,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SlotGrid>::with_props(props).render());

    assert!(html.contains("Full"));
    assert!(html.contains("Limited"));
    assert!(html.contains("Available"));
    // The full cell is a disabled button; only open cells show seats left.
    assert!(html.contains("disabled"));
    assert!(html.contains("btn-disabled"));
    assert!(html.contains("8 left"));
    assert!(html.contains("2 left"));
    assert!(html.contains("01 Mar 2026"));
}

#[test]
fn slot_grid_marks_the_selected_cell() {
    let props = SlotGridProps {
        exam: exam(10),
        slots: vec![slot("open", 3, 2)],
        selected_id: Some("open".into()),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SlotGrid>::with_props(props).render());
    assert!(html.contains("btn-primary"));
}

#[test]
fn exam_picker_lists_exams_with_prices() {
    let props = ExamPickerProps {
        exams: vec![exam(10)],
        selected_id: Some("ex-1".into()),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ExamPicker>::with_props(props).render());
    assert!(html.contains("Scholarship Test"));
    assert!(html.contains("₹500"));
    assert!(html.contains("10 seats per day"));
    assert!(html.contains("border-primary"));
}

#[test]
fn exam_cards_are_focusable_buttons() {
    let props = ExamPickerProps {
        exams: vec![exam(10)],
        selected_id: None,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ExamPicker>::with_props(props).render());
    // Keyboard users must be able to pick an exam; a plain div cannot
    // receive focus or Enter/Space activation.
    assert!(html.contains("<button"));
    assert!(html.contains(r#"type="button""#));
    assert!(html.contains("exam-card-ex-1"));
}

#[test]
fn price_summary_total_is_fee_plus_fifty() {
    let props = PriceSummaryProps {
        exam_title: "Scholarship Test".into(),
        exam_fee: 500,
    };
    let html = block_on(LocalServerRenderer::<PriceSummary>::with_props(props).render());
    assert!(html.contains("₹500"));
    assert!(html.contains("₹50"));
    assert!(html.contains("₹550"));
}

#[test]
fn price_summary_handles_free_exams() {
    let props = PriceSummaryProps {
        exam_title: "Mock Test".into(),
        exam_fee: 0,
    };
    let html = block_on(LocalServerRenderer::<PriceSummary>::with_props(props).render());
    assert!(html.contains("₹0"));
    assert!(html.contains("₹50"));
}

#[test]
fn confirmation_panel_shows_booking_summary() {
    let conf = BookingConfirmation::assemble(
        "Asha Rao",
        &exam(10),
        &slot("open", 12, 2),
        PaymentMethod::Upi,
    );
    let props = ConfirmationPanelProps {
        confirmation: conf,
        on_book_another: Callback::noop(),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmationPanel>::with_props(props).render());

    assert!(html.contains("Booking Confirmed"));
    assert!(html.contains("Asha Rao"));
    assert!(html.contains("12 Mar 2026"));
    assert!(html.contains("Paid —"));
    assert!(html.contains("₹550"));
    assert!(html.contains("UPI"));
    assert!(html.contains("Book Another Slot"));
    assert!(html.contains("Go to Home"));
}
