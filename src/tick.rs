//! Periodic tick source - the system time base.
//!
//! A 1 ms periodic task (interrupt priority) calls [`TickSource::on_tick`].
//! The main loop reads [`TickSource::now`] and consumes the redraw flag
//! with [`TickSource::take_redraw`]. The producer never clears the flag
//! and the consumer never increments the counter, so plain atomics are
//! enough - no lock is taken on either side.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Free-running millisecond counter plus a sticky "redraw requested" flag.
pub struct TickSource {
    millis: AtomicU32,
    /// Counter value at the last scroll interval boundary.
    mark: AtomicU32,
    redraw: AtomicBool,
    /// Mirrors `Screen::animates()` of the current screen.
    animating: AtomicBool,
    interval_ms: u32,
}

impl TickSource {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            millis: AtomicU32::new(0),
            mark: AtomicU32::new(0),
            redraw: AtomicBool::new(false),
            animating: AtomicBool::new(false),
            interval_ms: if interval_ms == 0 { 1 } else { interval_ms },
        }
    }

    /// Advance the clock by one tick. Interrupt context only.
    pub fn on_tick(&self) {
        let now = self.millis.load(Ordering::Relaxed).wrapping_add(1);
        self.millis.store(now, Ordering::Relaxed);

        let mark = self.mark.load(Ordering::Relaxed);
        if now.wrapping_sub(mark) >= self.interval_ms {
            self.mark
                .store(mark.wrapping_add(self.interval_ms), Ordering::Relaxed);
            if self.animating.load(Ordering::Relaxed) {
                self.redraw.store(true, Ordering::Release);
            }
        }
    }

    /// Milliseconds since boot, wrapping after ~49 days.
    #[inline]
    pub fn now(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }

    /// Wrap-safe milliseconds elapsed since `earlier`.
    #[inline]
    pub fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now().wrapping_sub(earlier)
    }

    /// Consume the redraw flag. Main loop only.
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::Acquire)
    }

    /// Tell the tick source whether the current screen scrolls.
    ///
    /// Leaving an animated screen also drops any pending redraw so a stale
    /// request cannot advance the marquee on the next song screen.
    pub fn set_animating(&self, animating: bool) {
        self.animating.store(animating, Ordering::Relaxed);
        if !animating {
            self.redraw.store(false, Ordering::Relaxed);
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
