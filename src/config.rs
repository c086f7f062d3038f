//! Application-wide constants and compile-time configuration.
//!
//! All display geometry, timing parameters, and the song catalog live
//! here so they can be tuned in one place. Nothing is reconfigurable at
//! runtime.

// Display

/// Character cells per display row.
pub const DISPLAY_WIDTH: usize = 16;

/// Number of display rows.
pub const DISPLAY_ROWS: u8 = 2;

/// Blank cells between the end of a scrolling line and its restart.
pub const SCROLL_PADDING: usize = 4;

/// Capacity of a single formatted line (title or artist) in bytes.
/// Longer catalog text is truncated.
pub const MAX_LINE_BYTES: usize = 64;

/// Start screen, top row.
pub const START_TITLE: &str = "Karaoke Machine";

/// Start screen, bottom row.
pub const START_PROMPT: &str = "Press 'Next'";

// Timing

/// Period of the tick source (ms).
pub const TICK_PERIOD_MS: u64 = 1;

/// Interval between marquee scroll steps (ms).
pub const SCROLL_INTERVAL_MS: u32 = 2_000;

/// Settle delay between the two samples of a debounced read (ms).
pub const DEBOUNCE_SETTLE_MS: u32 = 5;

/// Poll interval while waiting for a button group to be released (ms).
pub const RELEASE_POLL_MS: u32 = 1;

/// Upper bound on release polls before a held button is latched.
/// 30 000 × 1 ms ≈ 30 s of continuous hold.
pub const RELEASE_WAIT_MAX_POLLS: u32 = 30_000;

// Stepper

/// Time between full steps of the stepper motor (µs).
pub const STEP_PERIOD_US: u64 = 625;

// Status channel

/// UART baud rate of the status channel.
pub const STATUS_BAUD: u32 = 115_200;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button NEXT    → P0.11
//   Button SELECT  → P0.12
//   Button TOGGLE  → P0.24
//   Button RESET   → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   UART TX        → P0.06
//   Playing LED    → P0.13 (active-low)
//   Stepper IN1-4  → P1.01, P1.02, P1.03, P1.04

// Catalog

/// Song catalog in `"Title-Artist"` form, displayed in this order.
pub const SONG_CATALOG: &[&str] = &[
    "Again-Fetty Wap",
    "Happy-Pharrell",
    "Bohemian Rhapsody-Queen",
    "Don't Stop Believin'-Journey",
    "Take On Me-a-ha",
    "Sweet Caroline-Neil Diamond",
    "Livin' on a Prayer-Bon Jovi",
    "I Wanna Dance with Somebody-Whitney Houston",
];
