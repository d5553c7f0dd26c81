//! End-to-end walk of the booking wizard against an in-memory session
//! store: select, verify, check out, confirm, and the stale-cache edges.

use chrono::NaiveDate;
use nutshell_core::{
    Availability, BookingConfirmation, BookingEvent, BookingSession, BookingStage, Exam,
    FlowTarget, MemoryStore, PaymentMethod, SessionStore, Slot, StudentRecord,
    VerificationStatus, availability, continue_target, decide_next_route, keys,
};

fn exam() -> Exam {
    Exam {
        id: "ex-sch".into(),
        title: "National Scholarship Exam".into(),
        description: "Entrance scholarship test".into(),
        price: 500,
        total_slots_per_day: 10,
        created_at: None,
        updated_at: None,
    }
}

fn slot(booked: i32) -> Slot {
    Slot {
        id: "sl-77".into(),
        exam_id: "ex-sch".into(),
        date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
        booked_count: booked,
        created_at: None,
        updated_at: None,
    }
}

fn student() -> StudentRecord {
    StudentRecord {
        id: "st-11".into(),
        name: "Ravi Menon".into(),
        email: "ravi@example.com".into(),
        phone: "9000000001".into(),
        program: "JEE".into(),
    }
}

#[test]
fn first_time_visitor_walks_through_verification() {
    let store = MemoryStore::new();
    let mut stage = BookingStage::default();

    // Pick an exam, then a non-full slot.
    stage = stage.apply(BookingEvent::ExamChosen);
    let tier = availability(&exam(), &slot(2));
    assert_eq!(tier, Availability::Available);
    stage = stage.apply(BookingEvent::SlotChosen(tier));
    BookingSession::save_selection(&store, &exam(), &slot(2)).unwrap();

    // No cached student: Continue must route to verification.
    let session = BookingSession::load(&store);
    assert_eq!(continue_target(&session), FlowTarget::Verification);
    stage = stage.apply(BookingEvent::ContinuePressed {
        verified: session.is_verified(),
    });
    assert_eq!(stage, BookingStage::NeedsVerification);

    // Backend approves the lookup; snapshot is cached and routing flips.
    BookingSession::save_student(&store, &student()).unwrap();
    let session = BookingSession::load(&store);
    assert_eq!(
        decide_next_route(VerificationStatus::Approved, session.has_selection()),
        Some(FlowTarget::Checkout)
    );
    stage = stage.apply(BookingEvent::Verified);
    stage = stage.apply(BookingEvent::CheckoutOpened);

    // Checkout renders from the stored selection, no refetch involved.
    let stored_slot: Slot = store.get(keys::SELECTED_SLOT).unwrap();
    let stored_exam: Exam = store.get(keys::SELECTED_EXAM).unwrap();
    let confirmation = BookingConfirmation::assemble(
        &session.student.unwrap().name,
        &stored_exam,
        &stored_slot,
        PaymentMethod::Card,
    );
    assert_eq!(confirmation.slot_date, "05 Sep 2026");
    assert_eq!(confirmation.fee.total, 550);

    stage = stage.apply(BookingEvent::PaymentCompleted);
    stage = stage.apply(BookingEvent::ConfirmationExited);
    assert_eq!(stage, BookingStage::Confirmed);

    // Leaving the confirmation clears the selection but keeps the student.
    BookingSession::clear_selection(&store);
    let session = BookingSession::load(&store);
    assert!(!session.has_selection());
    assert!(session.is_verified());
}

#[test]
fn returning_student_skips_verification() {
    let store = MemoryStore::new();
    BookingSession::save_student(&store, &student()).unwrap();
    BookingSession::save_selection(&store, &exam(), &slot(0)).unwrap();

    let session = BookingSession::load(&store);
    assert_eq!(continue_target(&session), FlowTarget::Checkout);
}

#[test]
fn pending_lookup_caches_nothing_and_stays() {
    let store = MemoryStore::new();
    BookingSession::save_selection(&store, &exam(), &slot(0)).unwrap();

    // Pending: the screen shows its wait panel; nothing is written.
    let session = BookingSession::load(&store);
    assert_eq!(
        decide_next_route(VerificationStatus::Pending, session.has_selection()),
        None
    );
    assert!(BookingSession::load(&store).student.is_none());
}

#[test]
fn approval_without_selection_returns_to_slot_selection() {
    let store = MemoryStore::new();
    BookingSession::save_student(&store, &student()).unwrap();
    let session = BookingSession::load(&store);
    assert_eq!(
        decide_next_route(VerificationStatus::Approved, session.has_selection()),
        Some(FlowTarget::SlotSelection)
    );
}

#[test]
fn corrupted_selection_restarts_the_flow_cleanly() {
    let store = MemoryStore::new();
    store.set_raw(keys::SELECTED_EXAM, "<html>not json</html>").unwrap();
    store.set_raw(keys::SELECTED_SLOT, "{\"_id\":").unwrap();

    let session = BookingSession::load(&store);
    assert!(!session.has_selection());
    assert_eq!(continue_target(&session), FlowTarget::SlotSelection);
}

#[test]
fn full_slot_cannot_be_picked_even_when_overbooked() {
    for booked in [10, 11, 50] {
        let tier = availability(&exam(), &slot(booked));
        assert_eq!(tier, Availability::Full);
        let stage = BookingStage::SelectingSlot.apply(BookingEvent::SlotChosen(tier));
        assert_eq!(stage, BookingStage::SelectingSlot);
    }
}
