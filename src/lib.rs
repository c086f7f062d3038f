//! Karaoke controller core.
//!
//! Hardware-independent logic shared by the nRF52840 firmware and the
//! host test suite: button debouncing, the millisecond tick source, the
//! scrolling 16 × 2 song display, the UI state machine, the status line
//! codec and the stepper sequencer.
//!
//! Usage: `cargo test` (no features needed on the host)
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded`.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Core modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod status;
pub mod stepper;
pub mod tick;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use catalog::{Catalog, SongRecord};
pub use display::{CharacterDisplay, ScrollingDisplay};
pub use error::{Error, Result};
pub use status::{StatusLog, StatusReport, StatusReporter};
pub use stepper::{StepSequencer, StepperMotor};
pub use tick::TickSource;
pub use ui::buttons::{Buttons, SwitchReader};
pub use ui::indicator::PlaybackIndicator;
pub use ui::machine::UiMachine;
pub use ui::{ButtonId, ButtonSet, PlaybackContext, Screen, SwitchState};
