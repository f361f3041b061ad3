//! Pomo - Pomodoro Timer Firmware
//!
//! Main firmware binary for the Waveshare ESP32-C6-LCD-1.47: a 172×320
//! ST7789 panel, an AXS5106L capacitive touch controller and a QMI8658
//! accelerometer that turns the picture to match how the device stands.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use static_cell::StaticCell;
use {esp_backtrace as _, esp_println as _};

use pomo_core::app::App;
use pomo_core::config::LayoutConfig;
use pomo_display::GraphicsSurface;
use pomo_drivers::imu::Qmi8658;
use pomo_drivers::touch::{self, Axs5106l};
use pomo_hal_esp32c6::flash::FlashStorage;

use crate::board::{Board, I2cBus, PANEL_BUFFER_SIZE, PANEL_COLUMN_OFFSET, PANEL_HEIGHT, PANEL_WIDTH};
use crate::config::{boot_colors, boot_mode, boot_orientation, load_settings, timing, PersistedSettings};

mod board;
mod channels;
mod config;
mod tasks;

esp_bootloader_esp_idf::esp_app_desc!();

// Static cells for buffers and buses shared for the program lifetime
static PANEL_BUFFER: StaticCell<[u8; PANEL_BUFFER_SIZE]> = StaticCell::new();
static I2C_BUS: StaticCell<I2cBus> = StaticCell::new();

/// Main entry point
#[esp_rtos::main]
async fn main(spawner: Spawner) {
    info!("Pomo firmware starting...");

    let p = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    let timg0 = TimerGroup::new(p.TIMG0);
    let sw_int = SoftwareInterruptControl::new(p.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);
    info!("Peripherals initialized");

    let mut delay = Delay::new();

    // Load persisted colors (or the pomo.toml defaults)
    let mut storage = FlashStorage::new(p.FLASH);
    let record = load_settings(&mut storage, boot_colors()).await;

    // Display: ST7789 over SPI2, driven in its native portrait mounting
    let spi = match Spi::new(
        p.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(40))
            .with_mode(Mode::_0),
    ) {
        Ok(spi) => spi.with_sck(p.GPIO1).with_mosi(p.GPIO2),
        Err(e) => panic!("SPI2 config rejected: {:?}", e),
    };
    let cs = Output::new(p.GPIO14, Level::High, OutputConfig::default());
    let spi_device = match ExclusiveDevice::new_no_delay(spi, cs) {
        Ok(device) => device,
        Err(_) => panic!("Failed to take display chip select"),
    };
    let dc = Output::new(p.GPIO15, Level::Low, OutputConfig::default());
    let panel_rst = Output::new(p.GPIO22, Level::High, OutputConfig::default());
    let interface = SpiInterface::new(spi_device, dc, PANEL_BUFFER.init([0; PANEL_BUFFER_SIZE]));

    let panel = match mipidsi::Builder::new(ST7789, interface)
        .display_size(PANEL_WIDTH, PANEL_HEIGHT)
        .display_offset(PANEL_COLUMN_OFFSET, 0)
        .reset_pin(panel_rst)
        .init(&mut delay)
    {
        Ok(panel) => panel,
        Err(_) => panic!("Display init failed"),
    };
    let backlight = Output::new(p.GPIO23, Level::High, OutputConfig::default());
    info!("Display initialized ({}x{})", PANEL_WIDTH, PANEL_HEIGHT);

    // Touch and IMU share I2C0
    let i2c = match I2c::new(p.I2C0, I2cConfig::default().with_frequency(Rate::from_khz(400))) {
        Ok(i2c) => i2c.with_sda(p.GPIO18).with_scl(p.GPIO19),
        Err(e) => panic!("I2C0 config rejected: {:?}", e),
    };
    let i2c_bus = I2C_BUS.init(RefCell::new(i2c));

    let mut touch_reset = Output::new(p.GPIO20, Level::High, OutputConfig::default());
    if let Err(e) = touch::reset_pulse(&mut touch_reset, &mut delay) {
        warn!("Touch reset failed: {:?}", e);
    }
    let touch_int = Input::new(p.GPIO21, InputConfig::default().with_pull(Pull::Up));
    let touch = Axs5106l::new(RefCellDevice::new(i2c_bus), touch_int);

    let mut imu = Qmi8658::new(RefCellDevice::new(i2c_bus));
    match imu.init() {
        Ok(()) => info!("IMU initialized"),
        // Rotation stays at the boot orientation
        Err(e) => warn!("IMU init failed: {:?}, auto-rotation disabled", e),
    }

    // Console on UART0
    let uart = match Uart::new(p.UART0, UartConfig::default().with_baudrate(115_200)) {
        Ok(uart) => uart.with_tx(p.GPIO16).with_rx(p.GPIO17).into_async(),
        Err(e) => panic!("UART0 config rejected: {:?}", e),
    };
    let (rx, tx) = uart.split();
    info!("UART0 initialized for console");

    let orientation = boot_orientation();
    let board = Board {
        surface: GraphicsSurface::new(panel, orientation),
        touch,
        imu,
        _touch_reset: touch_reset,
        _backlight: backlight,
    };

    let app = App::new(timing(), LayoutConfig::default(), record.colors(), orientation)
        .with_mode(boot_mode());
    info!("Boot mode {}, orientation {}", app.mode().label(), orientation.index());

    spawner.spawn(tasks::ui_task(app, board, PersistedSettings::new(record))).unwrap();
    spawner.spawn(tasks::console_rx_task(rx)).unwrap();
    spawner.spawn(tasks::console_tx_task(tx)).unwrap();
    spawner.spawn(tasks::settings_task(storage)).unwrap();

    info!("All tasks spawned");
}
