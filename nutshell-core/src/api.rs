//! Request and response envelopes for the remote EduNutshell backend,
//! plus the path builders for every endpoint this client consumes.
//!
//! The backend owns all of these contracts; envelopes decode defensively
//! (`#[serde(default)]`) so a missing field degrades instead of failing
//! the whole screen.

use serde::{Deserialize, Serialize};

use crate::catalog::{BlogPost, Course, Testimonial};
use crate::exam::{Exam, Slot};
use crate::student::StudentRecord;

/// Default backend origin; the web crate can override it at build time.
pub const API_BASE_DEFAULT: &str = "https://api.edunutshell.in";

#[must_use]
pub const fn exams_list_path() -> &'static str {
    "/api/exams/list"
}

#[must_use]
pub fn slots_path(exam_id: &str) -> String {
    format!("/api/slot/{exam_id}")
}

#[must_use]
pub const fn student_register_path() -> &'static str {
    "/api/student/register"
}

#[must_use]
pub const fn student_lookup_path() -> &'static str {
    "/api/student/lookup"
}

#[must_use]
pub const fn courses_list_path() -> &'static str {
    "/api/courses/list"
}

#[must_use]
pub fn course_detail_path(course_id: &str) -> String {
    format!("/api/courses/{course_id}")
}

#[must_use]
pub const fn blogs_list_path() -> &'static str {
    "/api/blogs/list"
}

#[must_use]
pub fn blog_detail_path(blog_id: &str) -> String {
    format!("/api/blogs/{blog_id}")
}

#[must_use]
pub const fn testimonials_path() -> &'static str {
    "/api/testimonials/list"
}

#[must_use]
pub const fn enquiry_path() -> &'static str {
    "/api/enquiry"
}

#[must_use]
pub const fn chatbot_path() -> &'static str {
    "/api/chatbot/ask"
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExamListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub exams: Vec<Exam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    pub email: String,
    pub phone: String,
}

/// Lookup response; `status` drives the pending/approved branch and
/// `student` is only meaningful when the status is approved.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub student: Option<StudentRecord>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseDetailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub course: Option<Course>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub blogs: Vec<BlogPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogDetailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub blog: Option<BlogPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reply: String,
}

/// Body shape of a non-2xx backend error; only `message` is surfaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
