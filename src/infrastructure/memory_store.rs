// SPDX-License-Identifier: MPL-2.0
//! In-memory snapshot store.

use crate::application::port::StateStore;
use crate::domain::ui::UiState;
use crate::error::Result;
use std::collections::HashMap;

/// [`StateStore`] keeping snapshots in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: HashMap<String, UiState>,
}

impl MemoryStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn save(&mut self, key: &str, state: &UiState) -> Result<()> {
        self.entries.insert(key.to_string(), state.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<UiState>> {
        Ok(self.entries.get(key).cloned())
    }
}
