pub mod booking;
pub mod chat_widget;
pub mod course_card;
pub mod enquiry_popup;
pub mod footer;
pub mod header;
pub mod testimonials;
