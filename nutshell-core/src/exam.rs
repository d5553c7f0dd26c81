//! Exams and examination slots as served by the booking backend.
//!
//! Both records are server-owned; this client only reads them and derives
//! per-slot availability from `total_slots_per_day - booked_count`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flat processing fee added on top of every exam fee, in whole rupees.
pub const PROCESSING_FEE_INR: i64 = 50;

/// Fraction of per-day capacity below which a slot is shown as "limited".
const LIMITED_FRACTION: f64 = 0.30;

/// An exam offered for booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Exam fee in whole rupees.
    pub price: i64,
    #[serde(rename = "totalSlotsPerDay")]
    pub total_slots_per_day: i32,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// One bookable calendar date for an exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "examId")]
    pub exam_id: String,
    pub date: NaiveDate,
    #[serde(rename = "bookedCount")]
    pub booked_count: i32,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl Slot {
    /// Seats still open on this date. Negative values mean the backend
    /// overbooked; callers only need the sign, so no clamping here.
    #[must_use]
    pub fn available(&self, exam: &Exam) -> i32 {
        exam.total_slots_per_day - self.booked_count
    }

    /// Date formatted the way the checkout confirmation shows it,
    /// e.g. "01 Mar 2026".
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%d %b %Y").to_string()
    }
}

/// Availability tier shown on a slot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Full,
    Limited,
    Available,
}

impl Availability {
    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Short label for the slot cell badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Limited => "Limited",
            Self::Available => "Available",
        }
    }
}

/// Band a slot into its display tier: full at zero (or negative) seats,
/// limited under 30% of daily capacity, available otherwise.
#[must_use]
pub fn availability(exam: &Exam, slot: &Slot) -> Availability {
    let available = slot.available(exam);
    if available <= 0 {
        return Availability::Full;
    }
    let threshold = f64::from(exam.total_slots_per_day) * LIMITED_FRACTION;
    if f64::from(available) < threshold {
        Availability::Limited
    } else {
        Availability::Available
    }
}

/// Fee lines shown in the price summary and on the confirmation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub exam_fee: i64,
    pub processing_fee: i64,
    pub total: i64,
}

impl FeeBreakdown {
    /// Breakdown for an exam fee: `total == exam_fee + PROCESSING_FEE_INR`.
    #[must_use]
    pub const fn for_exam(exam_fee: i64) -> Self {
        Self {
            exam_fee,
            processing_fee: PROCESSING_FEE_INR,
            total: exam_fee + PROCESSING_FEE_INR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam(total: i32) -> Exam {
        Exam {
            id: "ex-1".into(),
            title: "Scholarship Test".into(),
            description: String::new(),
            price: 500,
            total_slots_per_day: total,
            created_at: None,
            updated_at: None,
        }
    }

    fn slot(booked: i32) -> Slot {
        Slot {
            id: "sl-1".into(),
            exam_id: "ex-1".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            booked_count: booked,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn full_at_capacity_and_beyond() {
        let e = exam(10);
        assert_eq!(availability(&e, &slot(10)), Availability::Full);
        // Overbooked backends still band as full, never panic.
        assert_eq!(availability(&e, &slot(12)), Availability::Full);
    }

    #[test]
    fn limited_under_thirty_percent() {
        let e = exam(10);
        assert_eq!(availability(&e, &slot(8)), Availability::Limited);
        assert_eq!(availability(&e, &slot(9)), Availability::Limited);
    }

    #[test]
    fn available_at_or_above_thirty_percent() {
        let e = exam(10);
        assert_eq!(availability(&e, &slot(7)), Availability::Available);
        assert_eq!(availability(&e, &slot(0)), Availability::Available);
    }

    #[test]
    fn fee_breakdown_adds_fixed_processing_fee() {
        for price in [0, 1, 500, 12_000] {
            let fee = FeeBreakdown::for_exam(price);
            assert_eq!(fee.processing_fee, PROCESSING_FEE_INR);
            assert_eq!(fee.total, price + 50);
        }
    }

    #[test]
    fn display_date_is_day_month_year() {
        assert_eq!(slot(0).display_date(), "01 Mar 2026");
    }

    #[test]
    fn slot_json_round_trip_preserves_identity() {
        let original = slot(4);
        let json = serde_json::to_string(&original).unwrap();
        let back: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, original.id);
        assert_eq!(back.date, original.date);
        assert_eq!(back.booked_count, original.booked_count);
    }
}
