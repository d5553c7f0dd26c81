//! HTTP client for the remote EduNutshell backend.
//!
//! Booking-flow requests carry no client-side timeout and rely on the
//! user-visible Retry control; the course list is the one endpoint with a
//! 10-second abort, which this module preserves rather than unifying.

#![allow(clippy::future_not_send)] // Wasm futures are single-threaded.

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use gloo_net::http::{Request, Response};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use nutshell_core::api::{
    API_BASE_DEFAULT, BlogDetailResponse, BlogListResponse, ChatRequest, ChatResponse,
    CourseDetailResponse, CourseListResponse, EnquiryRequest, ErrorBody, ExamListResponse,
    LookupRequest, LookupResponse, RegisterRequest, RegisterResponse, SlotListResponse,
    TestimonialListResponse, blog_detail_path, blogs_list_path, chatbot_path, course_detail_path,
    courses_list_path, enquiry_path, exams_list_path, slots_path, student_lookup_path,
    student_register_path, testimonials_path,
};
use nutshell_core::{ApiError, BlogPost, Course, Exam, Slot, Testimonial};

/// Abort window applied to the course list only.
const COURSE_FETCH_TIMEOUT_MS: u32 = 10_000;

static API_BASE: Lazy<String> = Lazy::new(|| {
    option_env!("NUTSHELL_API_BASE")
        .unwrap_or(API_BASE_DEFAULT)
        .trim_end_matches('/')
        .to_string()
});

fn url(path: &str) -> String {
    format!("{}{path}", API_BASE.as_str())
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Decode a response body, mapping non-2xx statuses to `ApiError::Backend`
/// with the backend's own message when it sent one.
async fn decode_body<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !resp.ok() {
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        return Err(ApiError::Backend { status, message });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /api/exams/list`
pub async fn fetch_exams() -> Result<Vec<Exam>, ApiError> {
    let resp = Request::get(&url(exams_list_path()))
        .send()
        .await
        .map_err(net_err)?;
    let body: ExamListResponse = decode_body(resp).await?;
    Ok(body.exams)
}

/// `GET /api/slot/{examId}`
pub async fn fetch_slots(exam_id: &str) -> Result<Vec<Slot>, ApiError> {
    let resp = Request::get(&url(&slots_path(exam_id)))
        .send()
        .await
        .map_err(net_err)?;
    let body: SlotListResponse = decode_body(resp).await?;
    Ok(body.slots)
}

/// `POST /api/student/register`
pub async fn register_student(req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    let resp = Request::post(&url(student_register_path()))
        .json(req)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode_body(resp).await
}

/// `POST /api/student/lookup`. The bearer token is attached only when the
/// session actually holds one; first-time visitors legitimately have none.
pub async fn lookup_student(
    req: &LookupRequest,
    token: Option<&str>,
) -> Result<LookupResponse, ApiError> {
    let mut builder = Request::post(&url(student_lookup_path()));
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = builder
        .json(req)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode_body(resp).await
}

/// `GET /api/courses/list` with the 10-second abort the original applies
/// to this endpoint alone.
pub async fn fetch_courses() -> Result<Vec<Course>, ApiError> {
    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(web_sys::AbortController::signal);
    let timed_out = Rc::new(Cell::new(false));
    let timer = controller.map(|controller| {
        let timed_out = timed_out.clone();
        Timeout::new(COURSE_FETCH_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    });

    let result = Request::get(&url(courses_list_path()))
        .abort_signal(signal.as_ref())
        .send()
        .await;
    // Dropping the timer cancels it once the response wins the race.
    drop(timer);

    let resp = result.map_err(|err| {
        if timed_out.get() {
            ApiError::Timeout
        } else {
            net_err(err)
        }
    })?;
    let body: CourseListResponse = decode_body(resp).await?;
    Ok(body.courses)
}

/// `GET /api/courses/{id}`
pub async fn fetch_course(course_id: &str) -> Result<Course, ApiError> {
    let resp = Request::get(&url(&course_detail_path(course_id)))
        .send()
        .await
        .map_err(net_err)?;
    let body: CourseDetailResponse = decode_body(resp).await?;
    body.course
        .ok_or_else(|| ApiError::Decode("response carried no course".into()))
}

/// `GET /api/blogs/list`
pub async fn fetch_blogs() -> Result<Vec<BlogPost>, ApiError> {
    let resp = Request::get(&url(blogs_list_path()))
        .send()
        .await
        .map_err(net_err)?;
    let body: BlogListResponse = decode_body(resp).await?;
    Ok(body.blogs)
}

/// `GET /api/blogs/{id}`
pub async fn fetch_blog(blog_id: &str) -> Result<BlogPost, ApiError> {
    let resp = Request::get(&url(&blog_detail_path(blog_id)))
        .send()
        .await
        .map_err(net_err)?;
    let body: BlogDetailResponse = decode_body(resp).await?;
    body.blog
        .ok_or_else(|| ApiError::Decode("response carried no blog".into()))
}

/// `GET /api/testimonials/list`
pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, ApiError> {
    let resp = Request::get(&url(testimonials_path()))
        .send()
        .await
        .map_err(net_err)?;
    let body: TestimonialListResponse = decode_body(resp).await?;
    Ok(body.testimonials)
}

/// `POST /api/enquiry`
pub async fn send_enquiry(req: &EnquiryRequest) -> Result<(), ApiError> {
    let resp = Request::post(&url(enquiry_path()))
        .json(req)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    if resp.ok() {
        Ok(())
    } else {
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        Err(ApiError::Backend { status, message })
    }
}

/// `POST /api/chatbot/ask`
pub async fn send_chat(message: &str) -> Result<String, ApiError> {
    let req = ChatRequest {
        message: message.to_string(),
    };
    let resp = Request::post(&url(chatbot_path()))
        .json(&req)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    let body: ChatResponse = decode_body(resp).await?;
    Ok(body.reply)
}

/// Loading lifecycle every fetch-driven screen shares.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::{Remote, url};

    #[test]
    fn url_joins_base_and_path() {
        let joined = url("/api/exams/list");
        assert!(joined.ends_with("/api/exams/list"));
        // No duplicated slash at the join point.
        assert!(!joined.trim_start_matches("https://").contains("//"));
    }

    #[test]
    fn remote_loading_state_is_observable() {
        let remote: Remote<Vec<u8>> = Remote::Loading;
        assert!(remote.is_loading());
        assert!(!Remote::Ready(vec![1_u8]).is_loading());
    }
}
