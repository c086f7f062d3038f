//! User interface subsystem - character display + physical buttons.
//!
//! The UI machine polls four debounced buttons every pass of the main
//! loop, moves between three screens, and re-renders the display only
//! when the screen or its content changes.
//!
//! ## Components
//!
//! - **Buttons**: 4 tactile switches, active-low with pull-up (NEXT,
//!   SELECT, TOGGLE, RESET), read through [`buttons::SwitchReader`]
//! - **Machine**: [`machine::UiMachine`], the per-pass state machine
//! - **Indicator**: [`indicator::PlaybackIndicator`], on while playing

pub mod buttons;
pub mod indicator;
pub mod input_logic;
pub mod machine;

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Splash - "Karaoke Machine" / "Press 'Next'".
    Start,
    /// Browsing the catalog.
    Select,
    /// A song is loaded; TOGGLE pauses and resumes it.
    Playing,
}

impl Screen {
    /// Whether this screen shows song text that may need to scroll.
    pub const fn animates(self) -> bool {
        matches!(self, Screen::Select | Screen::Playing)
    }

    /// Buttons polled on this screen, in polling order. RESET is handled
    /// ahead of these on every screen.
    pub const fn inputs(self) -> &'static [ButtonId] {
        match self {
            Screen::Start => &[ButtonId::Select, ButtonId::Next],
            Screen::Select => &[ButtonId::Select, ButtonId::Next],
            Screen::Playing => &[ButtonId::Toggle],
        }
    }

    /// Transition table: what a press of `button` does on this screen.
    pub const fn on_press(self, button: ButtonId) -> Option<Effect> {
        match (self, button) {
            (_, ButtonId::Reset) => Some(Effect::Reset),
            (Screen::Start, ButtonId::Select | ButtonId::Next) => Some(Effect::Enter(Screen::Select)),
            (Screen::Select, ButtonId::Select) => Some(Effect::Play),
            (Screen::Select, ButtonId::Next) => Some(Effect::NextSong),
            (Screen::Playing, ButtonId::Toggle) => Some(Effect::TogglePlayback),
            _ => None,
        }
    }
}

/// Outcome of a single button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Move to another screen with no other side effect.
    Enter(Screen),
    /// Enter `Playing`, toggle playback, report status.
    Play,
    /// Advance to the next catalog entry, wrapping.
    NextSong,
    /// Flip play/pause, report status.
    TogglePlayback,
    /// Back to `Start`, song 0, stopped; report with the reset flag set.
    Reset,
}

/// Logical button identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ButtonId {
    Next = 0,
    Select = 1,
    Toggle = 2,
    Reset = 3,
}

impl ButtonId {
    /// Number of physical buttons.
    pub const COUNT: usize = 4;

    /// All buttons in line order.
    pub const ALL: [ButtonId; Self::COUNT] = [
        ButtonId::Next,
        ButtonId::Select,
        ButtonId::Toggle,
        ButtonId::Reset,
    ];

    /// Index of the physical input line bound to this button.
    #[inline]
    pub const fn line(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitmask of buttons, one bit per [`ButtonId`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub fn of(buttons: &[ButtonId]) -> Self {
        buttons.iter().fold(Self::EMPTY, |set, &b| set.with(b))
    }

    #[must_use]
    pub const fn with(self, button: ButtonId) -> Self {
        ButtonSet(self.0 | button.mask())
    }

    #[must_use]
    pub const fn without(self, button: ButtonId) -> Self {
        ButtonSet(self.0 & !button.mask())
    }

    #[must_use]
    pub const fn union(self, other: ButtonSet) -> Self {
        ButtonSet(self.0 | other.0)
    }

    pub const fn contains(self, button: ButtonId) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Debounced state of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    NotPressed,
    Pressed,
}

impl SwitchState {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == SwitchState::Pressed
    }
}

/// Playback state owned by the run loop and lent to the UI machine.
///
/// The display engine and status reporter only ever see copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackContext {
    pub screen: Screen,
    /// Always a valid catalog index.
    pub song_index: usize,
    pub is_playing: bool,
    /// Set only while the reset report is being emitted.
    pub is_reset: bool,
}

impl PlaybackContext {
    pub const fn new() -> Self {
        Self {
            screen: Screen::Start,
            song_index: 0,
            is_playing: false,
            is_reset: false,
        }
    }
}

impl Default for PlaybackContext {
    fn default() -> Self {
        Self::new()
    }
}
