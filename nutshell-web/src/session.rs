//! Browser-backed session store.
//!
//! `LocalSession` persists the booking session in `localStorage` under the
//! original site's keys; the enquiry-popup flag lives in `sessionStorage`
//! so it resets per browser tab.

use gloo::storage::{LocalStorage, SessionStorage, Storage};
use nutshell_core::{SessionError, SessionStore, keys};

/// `localStorage`-backed implementation of the core [`SessionStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSession;

impl SessionStore for LocalSession {
    // The raw storage API keeps entries byte-compatible with the original
    // site's keys; the typed gloo API would wrap them in another JSON layer.
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// Whether the enquiry popup has already been shown this tab session.
#[must_use]
pub fn enquiry_popup_seen() -> bool {
    SessionStorage::get::<String>(keys::ENQUIRY_FLAG).is_ok()
}

/// Mark the enquiry popup as handled for the rest of this tab session.
pub fn mark_enquiry_popup_seen() {
    if let Err(err) = SessionStorage::set(keys::ENQUIRY_FLAG, "1".to_string()) {
        log::warn!("could not persist enquiry flag: {err}");
    }
}
