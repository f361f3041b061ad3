//! UI loop task
//!
//! Runs the engine at a fixed period: touch, remote commands, timer,
//! display and rotation all advance in one `App::step` per tick.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use pomo_core::app::{App, Dispatch, IgnoreReason, Peripherals, StepReport};
use pomo_core::render::Redraw;
use pomo_core::rotation::RotationPoll;

use crate::board::Board;
use crate::channels::{publish_status, ChannelOutbox, INBOX};
use crate::config::PersistedSettings;

/// Loop period; also the touch line sampling rate
pub const LOOP_INTERVAL_MS: u64 = 10;

#[embassy_executor::task]
pub async fn ui_task(mut app: App, mut board: Board, mut settings: PersistedSettings) {
    info!("UI task started");

    let mut outbox = ChannelOutbox;
    let mut ticker = Ticker::every(Duration::from_millis(LOOP_INTERVAL_MS));
    let start = Instant::now();

    loop {
        let now_ms = start.elapsed().as_millis() as u32;

        let report = app.step(
            &mut Peripherals {
                surface: &mut board.surface,
                touch: &mut board.touch,
                accel: &mut board.imu,
                settings: &mut settings,
                outbox: &mut outbox,
                inbox: &INBOX,
            },
            now_ms,
        );
        log_report(&app, &report);
        publish_status(app.status());

        ticker.next().await;
    }
}

fn log_report(app: &App, report: &StepReport) {
    match report.dispatch {
        Dispatch::Idle => {}
        Dispatch::Control(control) => debug!("Tap: {:?}", control),
        Dispatch::GridCell(index) => debug!("Palette cell {}", index),
        Dispatch::LongPressStart => info!("Long press: timer started"),
        Dispatch::LongPressStop => info!("Long press: timer stopped"),
        Dispatch::Ignored(IgnoreReason::Dropped(reason)) => trace!("Touch dropped: {:?}", reason),
        Dispatch::Ignored(reason) => debug!("Tap ignored: {:?}", reason),
    }

    if report.commands > 0 {
        info!("Applied {} remote command(s), state {:?}", report.commands, app.state());
    }

    if report.expired {
        info!("Session expired, now {:?} ({})", app.session(), app.mode().label());
    }

    match report.redraw {
        Ok(Redraw::Full(screen)) => debug!("Full redraw: {:?}", screen),
        Ok(_) => {}
        Err(e) => warn!("Display update failed: {:?}, full redraw scheduled", e),
    }

    match report.rotation {
        RotationPoll::Changed(orientation) => info!("Orientation changed to {:?}", orientation),
        RotationPoll::ReadFailed(e) => debug!("Accelerometer read failed: {:?}", e),
        RotationPoll::NotDue | RotationPoll::Unchanged => {}
    }
}
