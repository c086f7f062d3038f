//! Simulated hardware for driving the UI machine on the host.
//!
//! - [`Bench`]: four button lines on a shared virtual clock. Every delay
//!   the debouncer spends advances the clock and the tick source together.
//! - [`GridLcd`]: a 16 × 2 character grid.
//! - [`Led`]: an output pin whose level the test can read back.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use karaoke::config::DISPLAY_WIDTH;
use karaoke::{ButtonId, CharacterDisplay, TickSource};

const MS: u64 = 1_000_000;

type Clock = Rc<Cell<u64>>;
type Windows = Rc<RefCell<Vec<(u64, u64)>>>;

/// Advance `clock` by `ns`, ticking once per millisecond boundary crossed.
fn advance(clock: &Clock, ticks: &TickSource, ns: u64) {
    let before = clock.get();
    let after = before + ns;
    clock.set(after);
    for _ in before / MS..after / MS {
        ticks.on_tick();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Button bench
// ═══════════════════════════════════════════════════════════════════════════

pub struct Bench {
    clock: Clock,
    windows: [Windows; ButtonId::COUNT],
}

impl Bench {
    pub fn new() -> Self {
        Self {
            clock: Clock::default(),
            windows: Default::default(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.get() / MS
    }

    /// Hold `button` down for `hold_ms` starting now.
    pub fn press(&self, button: ButtonId, hold_ms: u64) {
        let now = self.clock.get();
        self.windows[button.line()]
            .borrow_mut()
            .push((now, now + hold_ms * MS));
    }

    /// Hold `button` down from now on.
    pub fn jam(&self, button: ButtonId) {
        let now = self.clock.get();
        self.windows[button.line()].borrow_mut().push((now, u64::MAX));
    }

    /// Release every button immediately.
    pub fn release_all(&self) {
        let now = self.clock.get();
        for windows in &self.windows {
            for window in windows.borrow_mut().iter_mut() {
                window.1 = window.1.min(now);
            }
        }
    }

    /// Let `ms` of wall time pass outside any debounce delay.
    pub fn idle(&self, ticks: &TickSource, ms: u64) {
        advance(&self.clock, ticks, ms * MS);
    }

    pub fn lines(&self) -> [BenchLine; ButtonId::COUNT] {
        ButtonId::ALL.map(|button| BenchLine {
            clock: self.clock.clone(),
            windows: self.windows[button.line()].clone(),
        })
    }

    pub fn delay<'a>(&self, ticks: &'a TickSource) -> BenchDelay<'a> {
        BenchDelay {
            clock: self.clock.clone(),
            ticks,
        }
    }
}

/// Active-low input line: reads low inside any scheduled press window.
pub struct BenchLine {
    clock: Clock,
    windows: Windows,
}

impl BenchLine {
    fn pressed(&self) -> bool {
        let now = self.clock.get();
        self.windows
            .borrow()
            .iter()
            .any(|&(from, until)| now >= from && now < until)
    }
}

impl ErrorType for BenchLine {
    type Error = Infallible;
}

impl InputPin for BenchLine {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.pressed())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pressed())
    }
}

pub struct BenchDelay<'a> {
    clock: Clock,
    ticks: &'a TickSource,
}

impl DelayNs for BenchDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        advance(&self.clock, self.ticks, u64::from(ns));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════════

pub struct GridLcd {
    cells: [[u8; DISPLAY_WIDTH]; 2],
    row: usize,
    col: usize,
    pub clears: usize,
}

impl GridLcd {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; DISPLAY_WIDTH]; 2],
            row: 0,
            col: 0,
            clears: 0,
        }
    }

    pub fn row(&self, row: usize) -> String {
        String::from_utf8_lossy(&self.cells[row]).into_owned()
    }

    /// Both rows with surrounding blanks removed.
    pub fn text(&self) -> (String, String) {
        (
            self.row(0).trim().to_string(),
            self.row(1).trim().to_string(),
        )
    }
}

impl CharacterDisplay for GridLcd {
    fn clear(&mut self) {
        self.cells = [[b' '; DISPLAY_WIDTH]; 2];
        self.row = 0;
        self.col = 0;
        self.clears += 1;
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        self.row = usize::from(row).min(1);
        self.col = usize::from(col).min(DISPLAY_WIDTH);
    }

    fn write_byte(&mut self, byte: u8) {
        if self.col < DISPLAY_WIDTH {
            self.cells[self.row][self.col] = byte;
            self.col += 1;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Indicator pin
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Default)]
pub struct Led(Rc<Cell<Option<bool>>>);

impl Led {
    /// Last driven level, `None` before the first write.
    pub fn level_high(&self) -> Option<bool> {
        self.0.get()
    }
}

impl ErrorType for Led {
    type Error = Infallible;
}

impl OutputPin for Led {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(Some(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(Some(true));
        Ok(())
    }
}
