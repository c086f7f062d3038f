//! Karaoke controller firmware for nRF52840.
//!
//! The UI state machine runs as a blocking loop from `#[entry]`. The 1 ms
//! tick and the stepper run as tasks on an interrupt executor (SWI1), so
//! they keep time while the UI loop busy-waits on debounce and release.

#![no_std]
#![no_main]

mod board;

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::InterruptExecutor;
use embassy_nrf::bind_interrupts;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::peripherals::{TWISPI0, UARTE0};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::uarte::{self, UarteTx};
use embassy_time::{Delay, Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use board::oled::OledPanel;
use board::uart::{self as status_uart, StatusUart};
use karaoke::config::{
    SCROLL_INTERVAL_MS, SONG_CATALOG, STATUS_BAUD, STEP_PERIOD_US, TICK_PERIOD_MS,
};
use karaoke::{
    Catalog, PlaybackContext, PlaybackIndicator, StepperMotor, SwitchReader, TickSource, UiMachine,
};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<TWISPI0>;
    UARTE0 => uarte::InterruptHandler<UARTE0>;
});

static TICKS: TickSource = TickSource::new(SCROLL_INTERVAL_MS);
static CATALOG: Catalog = Catalog::from_static(SONG_CATALOG);

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static OLED: StaticCell<OledPanel<Twim<'static, TWISPI0>>> = StaticCell::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// 1 ms time base for the marquee.
#[embassy_executor::task]
async fn tick_task() {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
    loop {
        ticker.next().await;
        TICKS.on_tick();
    }
}

/// Steps the motor once per step period, independent of the UI.
#[embassy_executor::task]
async fn stepper_task(mut motor: StepperMotor<Output<'static>>) {
    let mut ticker = Ticker::every(Duration::from_micros(STEP_PERIOD_US));
    motor.enable();
    loop {
        ticker.next().await;
        motor.tick();
    }
}

#[entry]
fn main() -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("karaoke-controller starting");

    // Time keeping and the stepper preempt the UI loop.
    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let spawner = EXECUTOR_HIGH.start(interrupt::EGU1_SWI1);
    unwrap!(spawner.spawn(tick_task()));

    let coils = [
        Output::new(p.P1_01, Level::Low, OutputDrive::Standard),
        Output::new(p.P1_02, Level::Low, OutputDrive::Standard),
        Output::new(p.P1_03, Level::Low, OutputDrive::Standard),
        Output::new(p.P1_04, Level::Low, OutputDrive::Standard),
    ];
    unwrap!(spawner.spawn(stepper_task(StepperMotor::new(coils))));

    // Order matches `ButtonId::line`: NEXT, SELECT, TOGGLE, RESET.
    let lines = [
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
        Input::new(p.P0_25, Pull::Up),
    ];
    let buttons = SwitchReader::new(lines, Delay);

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let lcd = OLED.init(OledPanel::new(i2c));

    let tx = UarteTx::new(p.UARTE0, Irqs, p.P0_06, status_uart::config(STATUS_BAUD));
    let status = StatusUart::new(tx);

    let led = PlaybackIndicator::active_low(Output::new(
        p.P0_13,
        Level::High,
        OutputDrive::Standard,
    ));

    let mut machine = UiMachine::new(CATALOG, &TICKS, buttons, lcd, status, led);
    let mut ctx = PlaybackContext::new();

    info!("UI loop running, {} songs", CATALOG.len());
    loop {
        machine.poll(&mut ctx);
    }
}
