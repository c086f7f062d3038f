//! GPIO button input with blocking debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - NEXT   - start the UI / advance to the next song
//!   - SELECT - start the UI / load the highlighted song
//!   - TOGGLE - play/pause while a song is loaded
//!   - RESET  - back to the start screen from anywhere
//!
//! A press is reported only when two samples taken one settle delay
//! apart both read low. Nothing is queued: callers that act on a press
//! must call [`Buttons::wait_for_release`] before polling again, which
//! collapses one physical press into one logical event.

use crate::config::{DEBOUNCE_SETTLE_MS, RELEASE_POLL_MS, RELEASE_WAIT_MAX_POLLS};
use crate::error::{Error, Result};
use crate::ui::{ButtonId, ButtonSet, SwitchState};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Button polling seam used by the UI machine.
pub trait Buttons {
    /// Debounced read of one button.
    fn check(&mut self, button: ButtonId) -> SwitchState;

    /// Block until every listed button reads released.
    ///
    /// Gives up after a bounded number of polls, returning
    /// [`Error::ReleaseTimeout`] with the buttons that were still held.
    fn wait_for_release(&mut self, buttons: &[ButtonId]) -> Result<()>;
}

/// Debounced reader over one input line per [`ButtonId`].
pub struct SwitchReader<P, D> {
    lines: [P; ButtonId::COUNT],
    delay: D,
    /// Buttons whose release wait timed out. They read `NotPressed`
    /// until the line is seen released once.
    latched: ButtonSet,
    settle_ms: u32,
    poll_ms: u32,
    max_polls: u32,
}

impl<P, D> SwitchReader<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    /// Create a reader. `lines` is indexed by [`ButtonId::line`].
    pub fn new(lines: [P; ButtonId::COUNT], delay: D) -> Self {
        Self {
            lines,
            delay,
            latched: ButtonSet::EMPTY,
            settle_ms: DEBOUNCE_SETTLE_MS,
            poll_ms: RELEASE_POLL_MS,
            max_polls: RELEASE_WAIT_MAX_POLLS,
        }
    }

    /// Override the release-wait guard.
    pub fn with_release_guard(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls.max(1);
        self
    }

    /// Buttons currently latched after a release timeout.
    pub fn latched(&self) -> ButtonSet {
        self.latched
    }

    /// Raw, undebounced level of one line. A read error counts as released.
    fn is_active(&mut self, button: ButtonId) -> bool {
        self.lines[button.line()].is_low().unwrap_or(false)
    }

    /// Drop the latch of every button whose line reads released, whether
    /// or not the current screen polls it.
    fn refresh_latches(&mut self) {
        if self.latched.is_empty() {
            return;
        }
        for button in ButtonId::ALL {
            if self.latched.contains(button) && !self.is_active(button) {
                self.latched = self.latched.without(button);
                debug!("Button {} released, latch cleared", button);
            }
        }
    }

    /// The non-latched buttons of `buttons` whose line reads active right now.
    fn held(&mut self, buttons: &[ButtonId]) -> ButtonSet {
        let mut held = ButtonSet::EMPTY;
        for &button in buttons {
            if !self.latched.contains(button) && self.is_active(button) {
                held = held.with(button);
            }
        }
        held
    }
}

impl<P, D> Buttons for SwitchReader<P, D>
where
    P: InputPin,
    D: DelayNs,
{
    fn check(&mut self, button: ButtonId) -> SwitchState {
        self.refresh_latches();
        if self.latched.contains(button) {
            return SwitchState::NotPressed;
        }

        if !self.is_active(button) {
            return SwitchState::NotPressed;
        }

        // Debounce: wait and re-check.
        self.delay.delay_ms(self.settle_ms);

        if self.is_active(button) {
            trace!("Button: {}", button);
            SwitchState::Pressed
        } else {
            SwitchState::NotPressed
        }
    }

    fn wait_for_release(&mut self, buttons: &[ButtonId]) -> Result<()> {
        self.refresh_latches();
        for _ in 0..self.max_polls {
            if self.held(buttons).is_empty() {
                // Release must survive a settle delay too, otherwise
                // contact bounce on the way up re-triggers the press.
                self.delay.delay_ms(self.settle_ms);
                if self.held(buttons).is_empty() {
                    return Ok(());
                }
            } else {
                self.delay.delay_ms(self.poll_ms);
            }
        }

        let held = self.held(buttons);
        if held.is_empty() {
            return Ok(());
        }

        self.latched = self.latched.union(held);
        warn!("Release wait expired, latching buttons {=u8:b}", held.bits());
        Err(Error::ReleaseTimeout(held))
    }
}
