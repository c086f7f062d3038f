//! Status channel over UARTE0 (TX only).

use core::fmt;

use embassy_nrf::uarte::{self, Instance, UarteTx};

/// Blocking `fmt::Write` over the UARTE transmitter.
///
/// Each `write_str` is one EasyDMA transfer; text held in flash is copied
/// to RAM by the driver.
pub struct StatusUart<'d, T: Instance> {
    tx: UarteTx<'d, T>,
}

impl<'d, T: Instance> StatusUart<'d, T> {
    pub fn new(tx: UarteTx<'d, T>) -> Self {
        Self { tx }
    }
}

impl<T: Instance> fmt::Write for StatusUart<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.blocking_write(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

/// 8N1 at `baud`. Only the rates the UARTE supports are accepted; anything
/// else falls back to 115 200.
pub fn config(baud: u32) -> uarte::Config {
    let mut config = uarte::Config::default();
    config.parity = uarte::Parity::EXCLUDED;
    config.baudrate = match baud {
        9_600 => uarte::Baudrate::BAUD9600,
        19_200 => uarte::Baudrate::BAUD19200,
        38_400 => uarte::Baudrate::BAUD38400,
        57_600 => uarte::Baudrate::BAUD57600,
        230_400 => uarte::Baudrate::BAUD230400,
        460_800 => uarte::Baudrate::BAUD460800,
        921_600 => uarte::Baudrate::BAUD921600,
        _ => uarte::Baudrate::BAUD115200,
    };
    config
}
