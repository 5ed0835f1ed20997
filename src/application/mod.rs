// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the view-model depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The view-model consumes application layer ports
//!
//! # Example
//!
//! ```ignore
//! use new_player::application::port::PlaybackEngine;
//! use new_player::infrastructure::memory_engine::MemoryEngine;
//!
//! // Infrastructure implements the port trait
//! let mut engine = MemoryEngine::new();
//! let events = engine.subscribe();
//! ```

pub mod port;
