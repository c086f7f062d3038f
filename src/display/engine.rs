//! Song display: "N. Title" on the top row, artist on the bottom row.
//!
//! Each row is centered when it fits and marquee-scrolled otherwise. The
//! panel is only cleared when the formatted text differs from what was
//! last drawn, so tick-driven redraws overwrite in place without flicker.

use core::fmt::Write;

use crate::catalog::SongRecord;
use crate::config::MAX_LINE_BYTES;
use crate::display::layout::{self, ScrollState};
use crate::display::CharacterDisplay;
use crate::ui::input_logic::display_number;

/// Formatted text of one row.
pub type Content = heapless::Vec<u8, MAX_LINE_BYTES>;

/// `fmt::Write` sink that drops whatever does not fit.
struct Truncating<'a> {
    buf: &'a mut Content,
    truncated: bool,
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for &b in s.as_bytes() {
            if self.buf.push(b).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

fn format_row(args: core::fmt::Arguments<'_>) -> Content {
    let mut content = Content::new();
    let mut sink = Truncating {
        buf: &mut content,
        truncated: false,
    };
    let _ = sink.write_fmt(args);
    if sink.truncated {
        debug!("Display row truncated to {} bytes", MAX_LINE_BYTES);
    }
    content
}

/// `"<index + 1>. <title>"`.
pub fn format_title(index: usize, title: &str) -> Content {
    format_row(format_args!("{}. {}", display_number(index), title))
}

/// Last-drawn row text.
#[derive(Default)]
struct RenderCache {
    title: Content,
    artist: Content,
    valid: bool,
}

impl RenderCache {
    fn matches(&self, title: &[u8], artist: &[u8]) -> bool {
        self.valid && self.title.as_slice() == title && self.artist.as_slice() == artist
    }
}

/// Two-row scrolling song display.
#[derive(Default)]
pub struct ScrollingDisplay {
    title: ScrollState,
    artist: ScrollState,
    cache: RenderCache,
}

impl ScrollingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `song` as catalog entry `index`.
    ///
    /// With `advance`, scrolling rows step one cell before drawing. New
    /// content clears the panel, rewinds both rows, and ignores `advance`.
    pub fn render<D: CharacterDisplay>(
        &mut self,
        lcd: &mut D,
        index: usize,
        song: SongRecord,
        advance: bool,
    ) {
        let (title, artist) = song.split();
        let title = format_title(index, title);
        let artist = format_row(format_args!("{}", artist));

        if self.cache.matches(&title, &artist) {
            if advance {
                self.title.advance();
                self.artist.advance();
            }
        } else {
            debug!("Display content changed (song {}), clearing", index);
            lcd.clear();
            self.title.reset(title.len());
            self.artist.reset(artist.len());
            self.cache.title = title;
            self.cache.artist = artist;
            self.cache.valid = true;
        }

        let top = self.title.layout(&self.cache.title);
        let bottom = self.artist.layout(&self.cache.artist);
        draw_rows(lcd, &top, &bottom);
    }

    /// Draw two fixed, centered rows (start screen). Forgets the cached
    /// song so the next [`render`](Self::render) clears first.
    pub fn render_static<D: CharacterDisplay>(&mut self, lcd: &mut D, top: &str, bottom: &str) {
        lcd.clear();
        self.invalidate();
        draw_rows(
            lcd,
            &layout::center(top.as_bytes()),
            &layout::center(bottom.as_bytes()),
        );
    }

    /// Forget what is on the panel.
    pub fn invalidate(&mut self) {
        self.cache.valid = false;
    }

    pub fn title_scroll(&self) -> &ScrollState {
        &self.title
    }

    pub fn artist_scroll(&self) -> &ScrollState {
        &self.artist
    }
}

fn draw_rows<D: CharacterDisplay>(lcd: &mut D, top: &layout::Line, bottom: &layout::Line) {
    lcd.set_cursor(0, 0);
    lcd.write_bytes(top);
    lcd.set_cursor(1, 0);
    lcd.write_bytes(bottom);
}
