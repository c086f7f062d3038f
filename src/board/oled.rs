//! SSD1306 OLED driven as a 16 × 2 character panel.
//!
//! 16 cells of `FONT_8X13` fill the 128 px width exactly. Cell contents
//! are mirrored in RAM; each written run redraws its row and flushes once.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use karaoke::config::{DISPLAY_ROWS, DISPLAY_WIDTH};
use karaoke::CharacterDisplay;

/// Concrete display driver, generic over the I²C implementation.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

const ROWS: usize = DISPLAY_ROWS as usize;

/// Top edge of each text row (px), vertically centered on the panel.
const ROW_TOP: [i32; ROWS] = [18, 34];

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_8X13)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build()
}

pub struct OledPanel<I2C> {
    display: Display<I2C>,
    cells: [[u8; DISPLAY_WIDTH]; ROWS],
    row: usize,
    col: usize,
}

impl<I2C> OledPanel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and blank the screen.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if display.init().is_err() {
            defmt::warn!("OLED init failed");
        }
        display.clear_buffer();
        let _ = display.flush();
        Self {
            display,
            cells: [[b' '; DISPLAY_WIDTH]; ROWS],
            row: 0,
            col: 0,
        }
    }

    /// Redraw one row from the cell mirror and push it to the panel.
    fn draw_row(&mut self, row: usize) {
        let mut glyphs = [b' '; DISPLAY_WIDTH];
        for (glyph, &cell) in glyphs.iter_mut().zip(self.cells[row].iter()) {
            // FONT_8X13 only covers printable ASCII.
            *glyph = if cell == b' ' || cell.is_ascii_graphic() {
                cell
            } else {
                b'?'
            };
        }
        let text = core::str::from_utf8(&glyphs).unwrap_or("");
        let origin = Point::new(0, ROW_TOP[row]);
        let _ = Text::with_baseline(text, origin, text_style(), Baseline::Top).draw(&mut self.display);
        let _ = self.display.flush();
    }

    fn put(&mut self, byte: u8) -> bool {
        if self.col >= DISPLAY_WIDTH {
            return false;
        }
        self.cells[self.row][self.col] = byte;
        self.col += 1;
        true
    }
}

impl<I2C> CharacterDisplay for OledPanel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.cells = [[b' '; DISPLAY_WIDTH]; ROWS];
        self.row = 0;
        self.col = 0;
        self.display.clear_buffer();
        let _ = self.display.flush();
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        self.row = usize::from(row).min(ROWS - 1);
        self.col = usize::from(col).min(DISPLAY_WIDTH);
    }

    fn write_byte(&mut self, byte: u8) {
        if self.put(byte) {
            self.draw_row(self.row);
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut changed = false;
        for &b in bytes {
            changed |= self.put(b);
        }
        if changed {
            self.draw_row(self.row);
        }
    }
}
