//! Error taxonomy for remote calls.
//!
//! Every failure is terminal to the operation that raised it: screens show
//! the user-facing string inline and offer a manual retry. Nothing is
//! reported beyond `log::error!`.

use thiserror::Error;

const GENERIC_CONNECT: &str = "Unable to connect. Please check your connection and try again.";
const GENERIC_BACKEND: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connectivity failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The request hit the client-side timeout (course list only).
    #[error("request timed out")]
    Timeout,

    /// Non-2xx response; `message` is the backend's text when it sent one.
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// 2xx response whose body did not decode to the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The inline string a screen renders for this failure. Backend text is
    /// surfaced verbatim when present, generic fallbacks otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Timeout => GENERIC_CONNECT.to_string(),
            Self::Backend { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Backend { .. } | Self::Decode(_) => GENERIC_BACKEND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = ApiError::Backend {
            status: 400,
            message: "Student already registered".into(),
        };
        assert_eq!(err.user_message(), "Student already registered");
    }

    #[test]
    fn empty_backend_message_falls_back_to_generic() {
        let err = ApiError::Backend {
            status: 500,
            message: String::new(),
        };
        assert!(err.user_message().starts_with("Something went wrong"));
    }

    #[test]
    fn network_and_timeout_share_the_connect_string() {
        let net = ApiError::Network("fetch failed".into());
        let timeout = ApiError::Timeout;
        assert_eq!(net.user_message(), timeout.user_message());
    }
}
