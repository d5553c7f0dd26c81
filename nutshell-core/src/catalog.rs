//! Read-through display types for the marketing side of the site:
//! courses, blog posts, testimonials, and the AI-mentor chat turns.
//!
//! These are rendered as-is from backend JSON; optional fields default so
//! partial payloads still decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: String,
    /// Listed price in whole rupees; courses without one show "Enquire".
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub quote: String,
    /// 1..=5 stars; defaults to 5 when the backend omits it.
    #[serde(default = "default_rating")]
    pub rating: u8,
}

const fn default_rating() -> u8 {
    5
}

/// Who authored a chat turn in the AI-mentor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    Student,
    Mentor,
}

/// One message in the mentor conversation, kept only in component state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    #[must_use]
    pub fn student(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Student,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn mentor(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Mentor,
            text: text.into(),
        }
    }
}
