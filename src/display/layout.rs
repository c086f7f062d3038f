//! Fixed-width line layout: centering and wrap-around marquee windows.

use crate::config::{DISPLAY_WIDTH, SCROLL_PADDING};

/// One full display row.
pub type Line = [u8; DISPLAY_WIDTH];

const BLANK: u8 = b' ';

/// Center `content` in a blank row with `floor((width - len) / 2)` leading
/// blanks. Content longer than the row is cut at the right edge.
pub fn center(content: &[u8]) -> Line {
    let mut line = [BLANK; DISPLAY_WIDTH];
    let len = content.len().min(DISPLAY_WIDTH);
    let padding = (DISPLAY_WIDTH - len) / 2;
    line[padding..padding + len].copy_from_slice(&content[..len]);
    line
}

/// A `DISPLAY_WIDTH` window onto `content` followed by `SCROLL_PADDING`
/// blanks, repeating: `window[i] = content[(offset + i) mod (len + pad)]`,
/// blank where that index falls in the gap.
pub fn marquee(content: &[u8], offset: usize) -> Line {
    let mut line = [BLANK; DISPLAY_WIDTH];
    let cycle = content.len() + SCROLL_PADDING;
    for (i, cell) in line.iter_mut().enumerate() {
        let pos = (offset + i) % cycle;
        if let Some(&b) = content.get(pos) {
            *cell = b;
        }
    }
    line
}

/// Scroll position of one display row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    scrolling: bool,
    /// `content length + SCROLL_PADDING` while scrolling, else 0.
    cycle: usize,
}

impl ScrollState {
    pub const fn new() -> Self {
        Self {
            offset: 0,
            scrolling: false,
            cycle: 0,
        }
    }

    /// Rewind for new content of `len` bytes.
    pub fn reset(&mut self, len: usize) {
        self.offset = 0;
        self.scrolling = len > DISPLAY_WIDTH;
        self.cycle = if self.scrolling {
            len + SCROLL_PADDING
        } else {
            0
        };
    }

    /// Step one cell; no-op for a line that fits.
    pub fn advance(&mut self) {
        if self.scrolling {
            self.offset = (self.offset + 1) % self.cycle;
        }
    }

    /// Lay out `content` at the current position.
    pub fn layout(&self, content: &[u8]) -> Line {
        if self.scrolling {
            marquee(content, self.offset)
        } else {
            center(content)
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}
