use embedded_hal::digital::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// Playback LED: lit while a song is playing.
pub struct PlaybackIndicator<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    lit: bool,
}

impl<PIN: OutputPin> PlaybackIndicator<PIN> {
    /// Wrap a pin and drive it to the off level.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut indicator = Self {
            pin,
            active,
            lit: true,
        };
        indicator.show(false);
        indicator
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Reflect the play flag on the LED.
    pub fn show(&mut self, playing: bool) {
        let high = match self.active {
            ActiveLevel::High => playing,
            ActiveLevel::Low => !playing,
        };
        let _ = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.lit = playing;
    }

    #[inline]
    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
