//! EduNutshell core
//!
//! Platform-agnostic domain logic for the EduNutshell enrollment site:
//! exam and slot records, the booking-flow state machine, the typed
//! booking session, and the API envelope types. No DOM or browser
//! dependency lives here; the web crate supplies those.

pub mod api;
pub mod catalog;
pub mod error;
pub mod exam;
pub mod flow;
pub mod session;
pub mod student;

// Re-export commonly used types
pub use api::{
    BlogListResponse, ChatRequest, ChatResponse, CourseListResponse, EnquiryRequest, ErrorBody,
    ExamListResponse, LookupRequest, LookupResponse, RegisterRequest, RegisterResponse,
    SlotListResponse, TestimonialListResponse,
};
pub use catalog::{BlogPost, ChatRole, ChatTurn, Course, Testimonial};
pub use error::ApiError;
pub use exam::{Availability, Exam, FeeBreakdown, PROCESSING_FEE_INR, Slot, availability};
pub use flow::{
    BookingConfirmation, BookingEvent, BookingStage, FlowTarget, PaymentMethod,
    VerificationState, continue_target, decide_next_route,
};
pub use session::{BookingSession, MemoryStore, SessionError, SessionStore, keys};
pub use student::{StudentRecord, VerificationStatus};
