//! Integration tests: the full UI machine against the simulated bench.

mod support;

use karaoke::config::{SCROLL_INTERVAL_MS, SCROLL_PADDING, SONG_CATALOG};
use karaoke::display::engine::format_title;
use karaoke::{
    ButtonId, Catalog, PlaybackContext, PlaybackIndicator, Screen, StatusLog, StatusReport,
    SwitchReader, TickSource, UiMachine,
};
use support::{Bench, BenchDelay, BenchLine, GridLcd, Led};

type Machine<'a> = UiMachine<'a, SwitchReader<BenchLine, BenchDelay<'a>>, GridLcd, String, Led>;

const TWO_SONGS: &[&str] = &["Again-Fetty Wap", "Happy-Pharrell"];

fn rig<'a>(bench: &Bench, ticks: &'a TickSource, songs: &'static [&'static str], led: &Led) -> Machine<'a> {
    let buttons = SwitchReader::new(bench.lines(), bench.delay(ticks));
    UiMachine::new(
        Catalog::new(songs).unwrap(),
        ticks,
        buttons,
        GridLcd::new(),
        String::new(),
        PlaybackIndicator::active_low(led.clone()),
    )
}

/// Tap `button` for 80 ms and run one pass.
fn tap(bench: &Bench, m: &mut Machine<'_>, ctx: &mut PlaybackContext, button: ButtonId) {
    bench.press(button, 80);
    m.poll(ctx);
}

fn reports(m: &Machine<'_>) -> Vec<StatusReport> {
    m.status()
        .channel()
        .lines()
        .map(|line| StatusReport::parse(line).unwrap())
        .collect()
}

fn text(m: &Machine<'_>) -> (String, String) {
    m.lcd().text()
}

fn pair(top: &str, bottom: &str) -> (String, String) {
    (top.to_string(), bottom.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// Walkthrough
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn browse_play_and_reset() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, TWO_SONGS, &led);
    let mut ctx = PlaybackContext::new();

    m.poll(&mut ctx);
    assert_eq!(text(&m), pair("Karaoke Machine", "Press 'Next'"));

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    m.poll(&mut ctx);
    assert_eq!(ctx.screen, Screen::Select);
    assert_eq!(ctx.song_index, 0);
    assert_eq!(m.lcd().row(0), "    1. Again    ");
    assert_eq!(m.lcd().row(1), "   Fetty Wap    ");

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    assert_eq!(ctx.song_index, 1);
    assert_eq!(m.lcd().row(0), "    2. Happy    ");
    assert_eq!(m.lcd().row(1), "    Pharrell    ");

    tap(&bench, &mut m, &mut ctx, ButtonId::Select);
    assert_eq!(ctx.screen, Screen::Playing);
    assert!(ctx.is_playing);
    assert_eq!(reports(&m), [StatusReport::new(true, 1, false)]);
    // Active-low LED: lit means driven low.
    assert_eq!(led.level_high(), Some(false));

    tap(&bench, &mut m, &mut ctx, ButtonId::Reset);
    assert_eq!(ctx.screen, Screen::Start);
    assert_eq!(ctx.song_index, 0);
    assert!(!ctx.is_playing);
    assert!(!ctx.is_reset);
    assert_eq!(led.level_high(), Some(true));
    assert_eq!(m.status().channel(), "P:1 S:1 R:0\nP:0 S:0 R:1\n");

    m.poll(&mut ctx);
    assert_eq!(text(&m), pair("Karaoke Machine", "Press 'Next'"));
}

#[test]
fn play_pause_resume_reports_each_toggle() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, TWO_SONGS, &led);
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Select);
    tap(&bench, &mut m, &mut ctx, ButtonId::Select);
    tap(&bench, &mut m, &mut ctx, ButtonId::Toggle);
    tap(&bench, &mut m, &mut ctx, ButtonId::Toggle);

    assert_eq!(
        reports(&m),
        [
            StatusReport::new(true, 0, false),
            StatusReport::new(false, 0, false),
            StatusReport::new(true, 0, false),
        ]
    );

    // The host listener sees three distinct commands.
    let mut log = StatusLog::<8>::new();
    assert_eq!(log.feed(m.status().channel()), Ok(3));
}

#[test]
fn reset_flag_clears_on_next_toggle() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, TWO_SONGS, &led);
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Reset);
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Select);

    assert_eq!(m.status().channel(), "P:0 S:0 R:1\nP:1 S:0 R:0\n");
    assert!(!ctx.is_reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// Input handling
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn long_hold_is_one_press() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, SONG_CATALOG, &led);
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    bench.press(ButtonId::Next, 1_500);
    for _ in 0..5 {
        m.poll(&mut ctx);
    }
    assert_eq!(ctx.song_index, 1);
    assert!(bench.now_ms() >= 1_500);
}

#[test]
fn song_index_stays_in_bounds() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, SONG_CATALOG, &led);
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    for step in 1..=3 * SONG_CATALOG.len() {
        tap(&bench, &mut m, &mut ctx, ButtonId::Next);
        assert!(ctx.song_index < SONG_CATALOG.len());
        assert_eq!(ctx.song_index, step % SONG_CATALOG.len());
    }
}

#[test]
fn glitch_on_next_is_ignored() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, TWO_SONGS, &led);
    let mut ctx = PlaybackContext::new();

    // Shorter than the settle delay.
    bench.press(ButtonId::Next, 2);
    m.poll(&mut ctx);
    assert_eq!(ctx.screen, Screen::Start);
}

#[test]
fn jammed_reset_latches_instead_of_hanging() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let buttons = SwitchReader::new(bench.lines(), bench.delay(&ticks)).with_release_guard(200);
    let mut m: Machine<'_> = UiMachine::new(
        Catalog::new(TWO_SONGS).unwrap(),
        &ticks,
        buttons,
        GridLcd::new(),
        String::new(),
        PlaybackIndicator::active_low(led.clone()),
    );
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    bench.jam(ButtonId::Reset);
    m.poll(&mut ctx);
    assert_eq!(ctx.screen, Screen::Start);

    // Still jammed: no repeat reset, and the other buttons keep working.
    m.poll(&mut ctx);
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    assert_eq!(ctx.screen, Screen::Select);
    assert_eq!(reports(&m), [StatusReport::new(false, 0, true)]);

    // Once physically released it works again.
    bench.release_all();
    m.poll(&mut ctx);
    tap(&bench, &mut m, &mut ctx, ButtonId::Reset);
    assert_eq!(reports(&m).len(), 2);
}

#[test]
fn toggle_released_off_screen_counts_again_on_return() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let buttons = SwitchReader::new(bench.lines(), bench.delay(&ticks)).with_release_guard(200);
    let mut m: Machine<'_> = UiMachine::new(
        Catalog::new(TWO_SONGS).unwrap(),
        &ticks,
        buttons,
        GridLcd::new(),
        String::new(),
        PlaybackIndicator::active_low(led.clone()),
    );
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Select);
    assert_eq!(ctx.screen, Screen::Playing);

    // TOGGLE jams: one pause, then the release wait gives up.
    bench.jam(ButtonId::Toggle);
    m.poll(&mut ctx);
    assert!(!ctx.is_playing);

    // Leave Playing and let TOGGLE go while no screen polls it.
    tap(&bench, &mut m, &mut ctx, ButtonId::Reset);
    bench.release_all();
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Select);
    assert_eq!(ctx.screen, Screen::Playing);
    assert!(ctx.is_playing);
    let before = reports(&m).len();

    tap(&bench, &mut m, &mut ctx, ButtonId::Toggle);
    assert!(!ctx.is_playing);
    assert_eq!(reports(&m).len(), before + 1);
    assert_eq!(reports(&m).last(), Some(&StatusReport::new(false, 0, false)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Scrolling
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn long_title_scrolls_one_cell_per_interval() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, SONG_CATALOG, &led);
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    m.poll(&mut ctx);
    assert_eq!(ctx.song_index, 2);
    assert_eq!(m.lcd().row(0), "3. Bohemian Rhap");
    assert_eq!(m.lcd().row(1), "     Queen      ");
    assert!(bench.now_ms() < u64::from(SCROLL_INTERVAL_MS));

    let content = format_title(2, "Bohemian Rhapsody");
    let cycle = content.len() + SCROLL_PADDING;
    let first = m.lcd().row(0);
    let clears = m.lcd().clears;

    for step in 1..=cycle {
        bench.idle(&ticks, u64::from(SCROLL_INTERVAL_MS));
        m.poll(&mut ctx);
        assert_eq!(m.display().title_scroll().offset(), step % cycle);
        // Artist fits: stays centered.
        assert_eq!(m.lcd().row(1), "     Queen      ");
    }
    assert_eq!(m.lcd().row(0), first);
    assert_eq!(m.lcd().clears, clears);
}

#[test]
fn no_scroll_between_intervals() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, SONG_CATALOG, &led);
    let mut ctx = PlaybackContext::new();

    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    tap(&bench, &mut m, &mut ctx, ButtonId::Next);
    for _ in 0..10 {
        bench.idle(&ticks, 100);
        m.poll(&mut ctx);
    }
    assert_eq!(m.display().title_scroll().offset(), 0);
}

#[test]
fn start_screen_never_scrolls() {
    let bench = Bench::new();
    let ticks = TickSource::new(SCROLL_INTERVAL_MS);
    let led = Led::default();
    let mut m = rig(&bench, &ticks, SONG_CATALOG, &led);
    let mut ctx = PlaybackContext::new();

    m.poll(&mut ctx);
    let clears = m.lcd().clears;
    for _ in 0..5 {
        bench.idle(&ticks, u64::from(SCROLL_INTERVAL_MS));
        m.poll(&mut ctx);
    }
    assert_eq!(text(&m), pair("Karaoke Machine", "Press 'Next'"));
    assert_eq!(m.lcd().clears, clears);
}
