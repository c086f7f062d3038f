//! UI state machine.
//!
//! [`UiMachine::poll`] runs once per main-loop pass:
//!
//! 1. RESET, ahead of everything else, on every screen.
//! 2. Entry render when the screen differs from the last one drawn.
//! 3. Tick-driven marquee step when the tick source asked for one.
//! 4. The current screen's buttons, first press in polling order wins.
//!
//! Every press that is acted on is followed by a release wait, so one
//! physical press is exactly one transition.

use core::fmt;

use embedded_hal::digital::OutputPin;

use crate::catalog::Catalog;
use crate::config::{START_PROMPT, START_TITLE};
use crate::display::{CharacterDisplay, ScrollingDisplay};
use crate::status::{StatusReport, StatusReporter};
use crate::tick::TickSource;
use crate::ui::buttons::Buttons;
use crate::ui::indicator::PlaybackIndicator;
use crate::ui::input_logic::next_song;
use crate::ui::{ButtonId, Effect, PlaybackContext, Screen};

pub struct UiMachine<'a, B, D, W, L: OutputPin> {
    catalog: Catalog,
    ticks: &'a TickSource,
    buttons: B,
    lcd: D,
    display: ScrollingDisplay,
    status: StatusReporter<W>,
    indicator: PlaybackIndicator<L>,
    last_rendered: Option<Screen>,
}

impl<'a, B, D, W, L> UiMachine<'a, B, D, W, L>
where
    B: Buttons,
    D: CharacterDisplay,
    W: fmt::Write,
    L: OutputPin,
{
    /// Wire the machine to its peripherals. Nothing is drawn until the
    /// first [`poll`](Self::poll).
    pub fn new(
        catalog: Catalog,
        ticks: &'a TickSource,
        buttons: B,
        lcd: D,
        status: W,
        indicator: PlaybackIndicator<L>,
    ) -> Self {
        Self {
            catalog,
            ticks,
            buttons,
            lcd,
            display: ScrollingDisplay::new(),
            status: StatusReporter::new(status),
            indicator,
            last_rendered: None,
        }
    }

    /// One pass of the control loop.
    pub fn poll(&mut self, ctx: &mut PlaybackContext) {
        if self.buttons.check(ButtonId::Reset).is_pressed() {
            self.reset(ctx);
            self.release(&[ButtonId::Reset]);
            return;
        }

        if self.last_rendered != Some(ctx.screen) {
            self.render_entry(ctx);
            self.last_rendered = Some(ctx.screen);
        }

        if self.ticks.take_redraw() && ctx.screen.animates() {
            self.render_song(ctx, true);
        }

        let screen = ctx.screen;
        for &button in screen.inputs() {
            if !self.buttons.check(button).is_pressed() {
                continue;
            }
            if let Some(effect) = screen.on_press(button) {
                self.apply(ctx, effect);
            }
            // On the start screen either button starts the UI, so both
            // must be let go before the next pass.
            let group = match screen {
                Screen::Start => screen.inputs(),
                _ => core::slice::from_ref(&button),
            };
            self.release(group);
            break;
        }
    }

    fn apply(&mut self, ctx: &mut PlaybackContext, effect: Effect) {
        match effect {
            Effect::Enter(screen) => self.set_screen(ctx, screen),
            Effect::Play => {
                self.set_screen(ctx, Screen::Playing);
                self.toggle_playback(ctx);
            }
            Effect::NextSong => {
                ctx.song_index = next_song(ctx.song_index, self.catalog.len());
                debug!("Next song: {}", ctx.song_index);
                self.render_song(ctx, false);
                self.last_rendered = None;
            }
            Effect::TogglePlayback => self.toggle_playback(ctx),
            Effect::Reset => self.reset(ctx),
        }
    }

    fn toggle_playback(&mut self, ctx: &mut PlaybackContext) {
        ctx.is_playing = !ctx.is_playing;
        self.status.report(StatusReport::from_context(ctx));
        self.indicator.show(ctx.is_playing);
        self.last_rendered = None;
    }

    fn reset(&mut self, ctx: &mut PlaybackContext) {
        self.set_screen(ctx, Screen::Start);
        ctx.song_index = 0;
        ctx.is_playing = false;
        ctx.is_reset = true;
        self.status.report(StatusReport::from_context(ctx));
        ctx.is_reset = false;
        self.indicator.show(false);
        self.last_rendered = None;
    }

    fn set_screen(&mut self, ctx: &mut PlaybackContext, screen: Screen) {
        if ctx.screen != screen {
            info!("Screen: {} -> {}", ctx.screen, screen);
        }
        ctx.screen = screen;
        self.ticks.set_animating(screen.animates());
    }

    fn render_entry(&mut self, ctx: &PlaybackContext) {
        match ctx.screen {
            Screen::Start => self
                .display
                .render_static(&mut self.lcd, START_TITLE, START_PROMPT),
            Screen::Select | Screen::Playing => self.render_song(ctx, false),
        }
    }

    fn render_song(&mut self, ctx: &PlaybackContext, advance: bool) {
        let song = self.catalog.get(ctx.song_index);
        self.display
            .render(&mut self.lcd, ctx.song_index, song, advance);
    }

    fn release(&mut self, buttons: &[ButtonId]) {
        if let Err(err) = self.buttons.wait_for_release(buttons) {
            warn!("Release wait gave up: {}", err);
        }
    }

    /// The character panel.
    pub fn lcd(&self) -> &D {
        &self.lcd
    }

    /// The button source, mutably.
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Scroll and cache state of the song rows.
    pub fn display(&self) -> &ScrollingDisplay {
        &self.display
    }

    /// The status channel and its report count.
    pub fn status(&self) -> &StatusReporter<W> {
        &self.status
    }

    /// The playback LED.
    pub fn indicator(&self) -> &PlaybackIndicator<L> {
        &self.indicator
    }
}
