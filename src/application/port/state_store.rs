// SPDX-License-Identifier: MPL-2.0
//! UI state persistence port definition.
//!
//! The host decides where and how snapshots are stored; the view-model only
//! hands over a [`UiState`] under [`UI_STATE_KEY`].

use crate::domain::ui::UiState;
use crate::error::Result;

/// Key under which the view-model stores its snapshot.
pub const UI_STATE_KEY: &str = "model_ui_state";

/// Port for saving and restoring UI snapshots across process restarts.
pub trait StateStore: Send {
    /// Stores `state` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::State`](crate::error::Error::State) if the backend
    /// cannot store the snapshot.
    fn save(&mut self, key: &str, state: &UiState) -> Result<()>;

    /// Loads the snapshot stored under `key`, `Ok(None)` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::State`](crate::error::Error::State) if the backend
    /// fails or the stored data is unreadable.
    fn load(&self, key: &str) -> Result<Option<UiState>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn _assert_object_safe(_: &dyn StateStore) {}

    struct FailingStore;

    impl StateStore for FailingStore {
        fn save(&mut self, _key: &str, _state: &UiState) -> Result<()> {
            Err(Error::State("read-only".to_string()))
        }

        fn load(&self, _key: &str) -> Result<Option<UiState>> {
            Ok(None)
        }
    }

    #[test]
    fn failing_store_reports_error() {
        let mut store = FailingStore;
        let err = store.save(UI_STATE_KEY, &UiState::default()).unwrap_err();
        assert!(matches!(err, Error::State(_)));
        assert!(store.load(UI_STATE_KEY).unwrap().is_none());
    }
}
