//! Settings persistence task
//!
//! Writes the color settings record to flash whenever the UI loop
//! changes it. Flash writes take milliseconds, so they stay off the loop.

use defmt::*;

use pomo_hal_esp32c6::flash::FlashStorage;

use crate::channels::SETTINGS_SAVE;
use crate::config::save_settings;

#[embassy_executor::task]
pub async fn settings_task(mut storage: FlashStorage<'static>) {
    info!("Settings task started");

    loop {
        let mut record = SETTINGS_SAVE.wait().await;
        if let Err(e) = save_settings(&mut storage, &mut record).await {
            error!("Failed to save settings: {:?}", e);
        }
    }
}
