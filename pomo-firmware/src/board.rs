//! Waveshare ESP32-C6-LCD-1.47 peripherals
//!
//! | Function | Pins |
//! |---|---|
//! | LCD SPI | SCK 1, MOSI 2, CS 14, DC 15, RST 22, backlight 23 |
//! | Touch/IMU I2C | SDA 18, SCL 19 |
//! | Touch | RST 20, INT 21 |
//! | Console UART0 | TX 16, RX 17 |

use core::cell::RefCell;

use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::gpio::{Input, Output};
use esp_hal::i2c::master::I2c;
use esp_hal::spi::master::Spi;
use esp_hal::Blocking;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;

use pomo_display::GraphicsSurface;
use pomo_drivers::imu::Qmi8658;
use pomo_drivers::touch::Axs5106l;

/// Panel width in its native portrait mounting
pub const PANEL_WIDTH: u16 = 172;

/// Panel height in its native portrait mounting
pub const PANEL_HEIGHT: u16 = 320;

/// Controller column of the first visible pixel
pub const PANEL_COLUMN_OFFSET: u16 = 34;

/// SPI command buffer for the panel interface
pub const PANEL_BUFFER_SIZE: usize = 512;

pub type I2cBus = RefCell<I2c<'static, Blocking>>;
pub type SharedI2c = RefCellDevice<'static, I2c<'static, Blocking>>;

pub type PanelSpi = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>;
pub type Panel = mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, Output<'static>>;

pub type Surface = GraphicsSurface<Panel>;
pub type Touch = Axs5106l<SharedI2c, Input<'static>>;
pub type Imu = Qmi8658<SharedI2c>;

/// Everything the UI loop drives
pub struct Board {
    pub surface: Surface,
    pub touch: Touch,
    pub imu: Imu,
    /// Held high for as long as the board runs
    pub _touch_reset: Output<'static>,
    pub _backlight: Output<'static>,
}
