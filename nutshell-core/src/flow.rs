//! The booking wizard's state machine.
//!
//! The original site had two near-duplicate verify-details screens with
//! diverging branch logic and inferred its position in the flow from which
//! storage keys existed. This module is the single authority both screens
//! now share: explicit verification states, one pure routing decision, and
//! a composite stage machine the pages step through.

use crate::exam::{Availability, Exam, FeeBreakdown, Slot};
use crate::session::BookingSession;
use crate::student::{StudentRecord, VerificationStatus};

/// Explicit verification state, replacing "does `studentData` exist".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationState {
    #[default]
    Unverified,
    Pending,
    Verified(StudentRecord),
}

impl VerificationState {
    /// Derive the state from a loaded session. A cached snapshot can only
    /// have been written on approval, so presence means verified.
    #[must_use]
    pub fn from_session(session: &BookingSession) -> Self {
        match &session.student {
            Some(student) => Self::Verified(student.clone()),
            None => Self::Unverified,
        }
    }
}

/// Where the wizard sends the user next. The web crate maps these onto
/// concrete routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTarget {
    Home,
    SlotSelection,
    Verification,
    Checkout,
}

/// The unified post-lookup routing decision.
///
/// `Approved` navigates: to checkout when a selection is already held,
/// else back to slot selection. Everything else stays on the current
/// screen (`None`) — pending shows its wait panel, errors show inline.
#[must_use]
pub const fn decide_next_route(
    status: VerificationStatus,
    has_selection: bool,
) -> Option<FlowTarget> {
    match status {
        VerificationStatus::Approved => {
            if has_selection {
                Some(FlowTarget::Checkout)
            } else {
                Some(FlowTarget::SlotSelection)
            }
        }
        VerificationStatus::Pending
        | VerificationStatus::Rejected
        | VerificationStatus::Unknown => None,
    }
}

/// Where the slot-selection Continue button goes: verification for
/// first-time visitors, checkout for cached students. Without a full
/// selection the user stays put.
#[must_use]
pub const fn continue_target(session: &BookingSession) -> FlowTarget {
    if !session.has_selection() {
        FlowTarget::SlotSelection
    } else if session.is_verified() {
        FlowTarget::Checkout
    } else {
        FlowTarget::Verification
    }
}

/// Composite wizard stage across all booking screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStage {
    #[default]
    SelectingExam,
    SelectingSlot,
    SlotPicked,
    NeedsVerification,
    Ready,
    FormEntry,
    PaymentSimulated,
    Confirmed,
}

/// Events the stage machine responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    ExamChosen,
    /// Carries the tier of the picked cell; full cells are rejected.
    SlotChosen(Availability),
    /// Continue pressed with the current verification standing.
    ContinuePressed { verified: bool },
    Verified,
    CheckoutOpened,
    PaymentCompleted,
    ConfirmationExited,
}

impl BookingStage {
    /// Step the machine. Events that do not apply in the current stage
    /// leave it unchanged, so a stray callback cannot skip a screen.
    #[must_use]
    pub const fn apply(self, event: BookingEvent) -> Self {
        match (self, event) {
            (Self::SelectingExam, BookingEvent::ExamChosen) => Self::SelectingSlot,
            // Re-picking the exam resets any held slot choice.
            (Self::SelectingSlot | Self::SlotPicked, BookingEvent::ExamChosen) => {
                Self::SelectingSlot
            }
            (Self::SelectingSlot | Self::SlotPicked, BookingEvent::SlotChosen(availability)) => {
                if availability.is_full() {
                    self
                } else {
                    Self::SlotPicked
                }
            }
            (Self::SlotPicked, BookingEvent::ContinuePressed { verified }) => {
                if verified {
                    Self::Ready
                } else {
                    Self::NeedsVerification
                }
            }
            (Self::NeedsVerification, BookingEvent::Verified) => Self::Ready,
            (Self::Ready, BookingEvent::CheckoutOpened) => Self::FormEntry,
            (Self::FormEntry, BookingEvent::PaymentCompleted) => Self::PaymentSimulated,
            (Self::PaymentSimulated, BookingEvent::ConfirmationExited) => Self::Confirmed,
            _ => self,
        }
    }
}

/// How the simulated payment is taken. No gateway is integrated; the
/// choice is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Card, Self::Upi, Self::NetBanking];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Debit / Credit Card",
            Self::Upi => "UPI",
            Self::NetBanking => "Net Banking",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::NetBanking => "netbanking",
        }
    }
}

/// UI-only summary assembled at checkout. No booking record is created
/// server-side; the institute reconciles bookings out of band.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub student_name: String,
    pub exam_title: String,
    pub slot_date: String,
    pub fee: FeeBreakdown,
    pub method: PaymentMethod,
}

impl BookingConfirmation {
    /// Assemble the confirmation from the checkout inputs.
    #[must_use]
    pub fn assemble(
        student_name: &str,
        exam: &Exam,
        slot: &Slot,
        method: PaymentMethod,
    ) -> Self {
        Self {
            student_name: student_name.to_string(),
            exam_title: exam.title.clone(),
            slot_date: slot.display_date(),
            fee: FeeBreakdown::for_exam(exam.price),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, SessionStore, keys};
    use chrono::NaiveDate;

    fn exam() -> Exam {
        Exam {
            id: "ex-1".into(),
            title: "Scholarship Test".into(),
            description: String::new(),
            price: 500,
            total_slots_per_day: 20,
            created_at: None,
            updated_at: None,
        }
    }

    fn slot() -> Slot {
        Slot {
            id: "sl-1".into(),
            exam_id: "ex-1".into(),
            date: NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
            booked_count: 3,
            created_at: None,
            updated_at: None,
        }
    }

    fn student() -> StudentRecord {
        StudentRecord {
            id: "st-1".into(),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            program: "NEET".into(),
        }
    }

    #[test]
    fn approved_routes_by_selection() {
        assert_eq!(
            decide_next_route(VerificationStatus::Approved, true),
            Some(FlowTarget::Checkout)
        );
        assert_eq!(
            decide_next_route(VerificationStatus::Approved, false),
            Some(FlowTarget::SlotSelection)
        );
    }

    #[test]
    fn pending_and_errors_never_navigate() {
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::Rejected,
            VerificationStatus::Unknown,
        ] {
            assert_eq!(decide_next_route(status, true), None);
            assert_eq!(decide_next_route(status, false), None);
        }
    }

    #[test]
    fn continue_goes_to_verification_without_cached_student() {
        let store = MemoryStore::new();
        BookingSession::save_selection(&store, &exam(), &slot()).unwrap();
        let session = BookingSession::load(&store);
        assert_eq!(continue_target(&session), FlowTarget::Verification);
    }

    #[test]
    fn continue_goes_to_checkout_with_cached_student() {
        let store = MemoryStore::new();
        BookingSession::save_selection(&store, &exam(), &slot()).unwrap();
        BookingSession::save_student(&store, &student()).unwrap();
        let session = BookingSession::load(&store);
        assert_eq!(continue_target(&session), FlowTarget::Checkout);
    }

    #[test]
    fn continue_stays_put_without_a_selection() {
        let session = BookingSession::default();
        assert_eq!(continue_target(&session), FlowTarget::SlotSelection);
    }

    #[test]
    fn verification_state_tracks_cached_snapshot() {
        let store = MemoryStore::new();
        assert_eq!(
            VerificationState::from_session(&BookingSession::load(&store)),
            VerificationState::Unverified
        );
        BookingSession::save_student(&store, &student()).unwrap();
        assert!(matches!(
            VerificationState::from_session(&BookingSession::load(&store)),
            VerificationState::Verified(s) if s.name == "Asha Rao"
        ));
    }

    #[test]
    fn corrupt_student_cache_reads_as_unverified() {
        let store = MemoryStore::new();
        store.set_raw(keys::STUDENT_DATA, "][").unwrap();
        assert_eq!(
            VerificationState::from_session(&BookingSession::load(&store)),
            VerificationState::Unverified
        );
    }

    #[test]
    fn stage_machine_walks_the_happy_path() {
        let mut stage = BookingStage::default();
        stage = stage.apply(BookingEvent::ExamChosen);
        stage = stage.apply(BookingEvent::SlotChosen(Availability::Available));
        assert_eq!(stage, BookingStage::SlotPicked);
        stage = stage.apply(BookingEvent::ContinuePressed { verified: false });
        assert_eq!(stage, BookingStage::NeedsVerification);
        stage = stage.apply(BookingEvent::Verified);
        stage = stage.apply(BookingEvent::CheckoutOpened);
        stage = stage.apply(BookingEvent::PaymentCompleted);
        stage = stage.apply(BookingEvent::ConfirmationExited);
        assert_eq!(stage, BookingStage::Confirmed);
    }

    #[test]
    fn out_of_order_events_do_not_skip_screens() {
        let stage = BookingStage::SelectingExam;
        assert_eq!(
            stage.apply(BookingEvent::PaymentCompleted),
            BookingStage::SelectingExam
        );
        assert_eq!(
            stage.apply(BookingEvent::CheckoutOpened),
            BookingStage::SelectingExam
        );
    }

    #[test]
    fn full_slot_never_becomes_the_pick() {
        let stage = BookingStage::SelectingSlot;
        assert_eq!(
            stage.apply(BookingEvent::SlotChosen(Availability::Full)),
            BookingStage::SelectingSlot
        );
        // Continue has nothing to act on until a real pick happens.
        assert_eq!(
            stage.apply(BookingEvent::ContinuePressed { verified: true }),
            BookingStage::SelectingSlot
        );
    }

    #[test]
    fn confirmation_carries_the_fee_breakdown() {
        let conf =
            BookingConfirmation::assemble("Asha Rao", &exam(), &slot(), PaymentMethod::Upi);
        assert_eq!(conf.fee.total, 550);
        assert_eq!(conf.slot_date, "12 Apr 2026");
        assert_eq!(conf.exam_title, "Scholarship Test");
    }
}
