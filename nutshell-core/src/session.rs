//! The typed booking session and the storage abstraction behind it.
//!
//! The original site scattered string-keyed `localStorage` reads across
//! screens and inferred flow state from which keys happened to exist.
//! Here every read goes through [`SessionStore::get`], which treats a
//! missing or malformed entry as absent instead of throwing, and the
//! screens share one [`BookingSession`] view of the whole session.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::exam::{Exam, Slot};
use crate::student::StudentRecord;

/// Storage keys, kept byte-compatible with the original site so an
/// in-flight booking survives a deploy.
pub mod keys {
    pub const SELECTED_SLOT: &str = "selectedSlot";
    pub const SELECTED_EXAM: &str = "selectedExam";
    pub const STUDENT_DATA: &str = "studentData";
    pub const TOKEN: &str = "token";
    /// Session-scoped flag suppressing the enquiry popup after one showing.
    pub const ENQUIRY_FLAG: &str = "enquiryFormFilled";
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key/value persistence for the booking session. Implementations exist
/// for browser `localStorage` (web crate) and in-memory maps (tests).
pub trait SessionStore {
    /// Raw string read; `None` when the key is absent.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Raw string write.
    ///
    /// # Errors
    /// Returns an error when the underlying store rejects the write
    /// (quota, disabled storage).
    fn set_raw(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str);

    /// Typed read. A malformed entry is discarded and reads as `None`;
    /// the entry stays in place so a newer deploy can still inspect it.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring malformed session entry `{key}`: {err}");
                None
            }
        }
    }

    /// Typed write.
    ///
    /// # Errors
    /// Returns an error when serialization or the underlying write fails.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json)
    }
}

/// Everything the booking wizard carries across screens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingSession {
    pub selected_exam: Option<Exam>,
    pub selected_slot: Option<Slot>,
    pub student: Option<StudentRecord>,
    pub token: Option<String>,
}

impl BookingSession {
    /// Snapshot the session from a store. The token is stored as a bare
    /// string (not JSON), matching the original key format.
    #[must_use]
    pub fn load(store: &impl SessionStore) -> Self {
        Self {
            selected_exam: store.get(keys::SELECTED_EXAM),
            selected_slot: store.get(keys::SELECTED_SLOT),
            student: store.get(keys::STUDENT_DATA),
            token: store.get_raw(keys::TOKEN).filter(|t| !t.is_empty()),
        }
    }

    /// A selection needs both halves; a lone slot or exam is treated as
    /// no selection at all.
    #[must_use]
    pub const fn has_selection(&self) -> bool {
        self.selected_exam.is_some() && self.selected_slot.is_some()
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.student.is_some()
    }

    /// Persist a slot pick. Writes exactly the two selection keys.
    ///
    /// # Errors
    /// Returns an error when either write fails.
    pub fn save_selection(
        store: &impl SessionStore,
        exam: &Exam,
        slot: &Slot,
    ) -> Result<(), SessionError> {
        store.set(keys::SELECTED_EXAM, exam)?;
        store.set(keys::SELECTED_SLOT, slot)
    }

    /// Cache an approved student snapshot.
    ///
    /// # Errors
    /// Returns an error when the write fails.
    pub fn save_student(
        store: &impl SessionStore,
        student: &StudentRecord,
    ) -> Result<(), SessionError> {
        store.set(keys::STUDENT_DATA, student)
    }

    /// # Errors
    /// Returns an error when the write fails.
    pub fn save_token(store: &impl SessionStore, token: &str) -> Result<(), SessionError> {
        store.set_raw(keys::TOKEN, token)
    }

    /// Drop the slot/exam pick, keeping the student snapshot and token so
    /// re-booking skips verification. Called when the user leaves the
    /// confirmation panel.
    pub fn clear_selection(store: &impl SessionStore) {
        store.remove(keys::SELECTED_SLOT);
        store.remove(keys::SELECTED_EXAM);
    }

    /// Full wipe of every booking key.
    pub fn clear(store: &impl SessionStore) {
        Self::clear_selection(store);
        store.remove(keys::STUDENT_DATA);
        store.remove(keys::TOKEN);
    }
}

/// In-memory store for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_exam() -> Exam {
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

    fn sample_slot() -> Slot {
        Slot {
            id: "sl-9".into(),
            exam_id: "ex-1".into(),
            date: NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
            booked_count: 3,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample_student() -> StudentRecord {
        StudentRecord {
            id: "st-1".into(),
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            program: "NEET".into(),
        }
    }

    #[test]
    fn save_selection_writes_exactly_the_two_selection_keys() {
        let store = MemoryStore::new();
        BookingSession::save_selection(&store, &sample_exam(), &sample_slot()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get_raw(keys::SELECTED_SLOT).is_some());
        assert!(store.get_raw(keys::SELECTED_EXAM).is_some());
    }

    #[test]
    fn slot_round_trips_through_the_store() {
        let store = MemoryStore::new();
        let slot = sample_slot();
        BookingSession::save_selection(&store, &sample_exam(), &slot).unwrap();
        let back: Slot = store.get(keys::SELECTED_SLOT).unwrap();
        assert_eq!(back.id, slot.id);
        assert_eq!(back.date, slot.date);
        assert_eq!(back.booked_count, slot.booked_count);
    }

    #[test]
    fn malformed_entries_read_as_absent() {
        let store = MemoryStore::new();
        store.set_raw(keys::SELECTED_SLOT, "{not json").unwrap();
        let session = BookingSession::load(&store);
        assert!(session.selected_slot.is_none());
        assert!(!session.has_selection());
    }

    #[test]
    fn lone_slot_is_not_a_selection() {
        let store = MemoryStore::new();
        store.set(keys::SELECTED_SLOT, &sample_slot()).unwrap();
        assert!(!BookingSession::load(&store).has_selection());
    }

    #[test]
    fn token_is_stored_as_a_bare_string() {
        let store = MemoryStore::new();
        BookingSession::save_token(&store, "abc123").unwrap();
        assert_eq!(store.get_raw(keys::TOKEN).as_deref(), Some("abc123"));
        assert_eq!(BookingSession::load(&store).token.as_deref(), Some("abc123"));
    }

    #[test]
    fn clear_selection_keeps_student_and_token() {
        let store = MemoryStore::new();
        BookingSession::save_selection(&store, &sample_exam(), &sample_slot()).unwrap();
        BookingSession::save_student(&store, &sample_student()).unwrap();
        BookingSession::save_token(&store, "tok").unwrap();

        BookingSession::clear_selection(&store);
        let session = BookingSession::load(&store);
        assert!(!session.has_selection());
        assert!(session.is_verified());
        assert!(session.token.is_some());

        BookingSession::clear(&store);
        assert!(store.is_empty());
    }
}
