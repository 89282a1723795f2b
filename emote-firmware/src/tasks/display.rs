//! Display update task
//!
//! Renders the published screen to the SH1106 panel.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use emote_display::{Canvas, Layout, Screen};

use crate::bitmaps::Faces;
use crate::channels::SCREEN_UPDATE;
use crate::sh1106::Sh1106;

/// OLED panel on I2C0
pub type Panel = Sh1106<I2c<'static, I2C0, Async>>;

/// Shared screen buffer protected by mutex
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Display task - redraws the panel on every screen update
#[embassy_executor::task]
pub async fn display_task(panel: Panel, layout: Layout) {
    info!("Display task started");

    let mut canvas = Canvas::new(panel);
    match canvas.inner_mut().init().await {
        Ok(()) => info!("OLED initialized"),
        Err(e) => {
            error!("Failed to initialize display: {:?}", e);
            canvas.set_ready(false);
        }
    }

    loop {
        SCREEN_UPDATE.wait().await;

        let screen = SCREEN_BUFFER.lock().await.clone();

        if let Err(e) = screen.render(&mut canvas, &Faces, &layout) {
            warn!("Render failed: {:?}", e);
            continue;
        }

        if let Err(e) = canvas.inner_mut().flush().await {
            warn!("Display flush failed: {:?}", e);
        } else {
            trace!("Display updated");
        }
    }
}
