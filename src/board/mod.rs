//! nRF52840 board glue: concrete backends for the library's hardware seams.
//!
//! - **OLED**: [`oled::OledPanel`], SSD1306 over TWIM as the 16 × 2 panel
//! - **UART**: [`uart::StatusUart`], the status channel over UARTE0
//!
//! Buttons, the playback LED and the stepper coils use `embassy_nrf::gpio`
//! pins directly; they already implement the `embedded-hal` traits.

pub mod oled;
pub mod uart;
