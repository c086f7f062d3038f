//! Character display boundary and the scrolling song display.
//!
//! The panel is a text-mode 16 × 2 character device addressed by 0-based
//! (row, column). Everything above that boundary - centering, marquee
//! scrolling, redundant-redraw suppression - lives in [`engine`] and
//! [`layout`] and is independent of the actual panel.

pub mod engine;
pub mod layout;

pub use engine::ScrollingDisplay;
pub use layout::{Line, ScrollState};

/// Text-mode character display.
///
/// Bytes are written verbatim; control characters are not filtered.
pub trait CharacterDisplay {
    /// Blank the whole panel and home the cursor.
    fn clear(&mut self);

    /// Move the write cursor. Out-of-range positions are clamped by the
    /// implementation.
    fn set_cursor(&mut self, row: u8, col: u8);

    /// Write one byte at the cursor and advance it.
    fn write_byte(&mut self, byte: u8);

    /// Write a run of bytes starting at the cursor.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }

    fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes());
    }
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        (**self).set_cursor(row, col);
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}
