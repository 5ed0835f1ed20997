// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains the UI mode table, the UI snapshot and UI-related
//! value objects that are independent of any presentation framework.

pub mod mode;
pub mod newtypes;
pub mod state;

// Re-export commonly used types
pub use mode::{ContentFitMode, Layout, UiMode};
pub use newtypes::{AutoHideDelay, Brightness, ProgressInterval};
pub use state::{EmbeddedUiConfig, UiState};
