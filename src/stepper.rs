//! Four-phase full-step stepper drive (ULN2003-style driver board).
//!
//! [`StepSequencer`] only tracks the phase; [`StepperMotor`] writes the
//! coil pattern to four output lines. The periodic timer that calls
//! [`StepperMotor::tick`] lives in the binary.

use embedded_hal::digital::OutputPin;

/// Coil patterns, IN1 in bit 3 down to IN4 in bit 0.
pub const STEP_SEQUENCE: [u8; 4] = [0b1000, 0b0100, 0b0010, 0b0001];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Phase index into [`STEP_SEQUENCE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSequencer {
    step: u8,
}

impl StepSequencer {
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    /// Advance one phase and return the new coil pattern.
    pub fn step_clockwise(&mut self) -> u8 {
        self.step = (self.step + 1) % STEP_SEQUENCE.len() as u8;
        self.pattern()
    }

    /// Go back one phase and return the new coil pattern.
    pub fn step_counter_clockwise(&mut self) -> u8 {
        self.step = (self.step + STEP_SEQUENCE.len() as u8 - 1) % STEP_SEQUENCE.len() as u8;
        self.pattern()
    }

    pub fn step(&mut self, direction: Direction) -> u8 {
        match direction {
            Direction::Clockwise => self.step_clockwise(),
            Direction::CounterClockwise => self.step_counter_clockwise(),
        }
    }

    #[inline]
    pub fn pattern(&self) -> u8 {
        STEP_SEQUENCE[usize::from(self.step)]
    }

    #[inline]
    pub fn index(&self) -> u8 {
        self.step
    }
}

/// Sequencer bound to four coil outputs (IN1..IN4).
pub struct StepperMotor<P> {
    coils: [P; 4],
    sequencer: StepSequencer,
    direction: Direction,
    enabled: bool,
}

impl<P: OutputPin> StepperMotor<P> {
    /// Take the coil lines and drive them all low. Starts disabled.
    pub fn new(coils: [P; 4]) -> Self {
        let mut motor = Self {
            coils,
            sequencer: StepSequencer::new(),
            direction: Direction::Clockwise,
            enabled: false,
        };
        motor.write(0);
        motor
    }

    /// Start stepping on the next tick.
    pub fn enable(&mut self) {
        if !self.enabled {
            info!("Stepper enabled");
        }
        self.enabled = true;
    }

    /// Stop stepping. The coils keep their last pattern (holding torque).
    pub fn disable(&mut self) {
        if self.enabled {
            info!("Stepper disabled");
        }
        self.enabled = false;
    }

    /// Whether [`tick`](Self::tick) steps the motor.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Direction for subsequent steps.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// One timer period: step once if enabled.
    pub fn tick(&mut self) {
        if self.enabled {
            let pattern = self.sequencer.step(self.direction);
            self.write(pattern);
        }
    }

    /// Current phase.
    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    /// Write all four coils in one pass.
    fn write(&mut self, pattern: u8) {
        for (i, coil) in self.coils.iter_mut().enumerate() {
            let _ = if pattern & (0b1000 >> i) != 0 {
                coil.set_high()
            } else {
                coil.set_low()
            };
        }
    }
}
