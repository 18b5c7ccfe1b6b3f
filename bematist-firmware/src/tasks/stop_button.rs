//! Stop button task
//!
//! Trips the shared cancel flag when the stop button is pressed. The
//! motion task picks this up at the next beat boundary.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::channels::WALK_CANCEL;

/// Debounce interval after a press
const DEBOUNCE_MS: u64 = 250;

/// Stop button task - cancels an in-progress walk
#[embassy_executor::task]
pub async fn stop_button_task(mut button: Input<'static>) {
    info!("Stop button task started");

    loop {
        button.wait_for_falling_edge().await;
        info!("Stop requested");
        WALK_CANCEL.cancel();
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
