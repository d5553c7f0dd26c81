pub mod about;
pub mod blog_detail;
pub mod blogs;
pub mod checkout;
pub mod course_detail;
pub mod courses;
pub mod faq;
pub mod home;
pub mod login;
pub mod not_found;
pub mod partners;
pub mod policies;
pub mod slot_selection;
pub mod verify;
