//! Main controller task
//!
//! Owns the display controller. Drains the input queue in arrival order,
//! handles each input to completion, and triggers display updates.

use defmt::*;

use emote_core::{DisplayConfig, DisplayController, Inbound};
use emote_display::Screen;

use crate::channels::{next_input, wait_input, SCREEN_UPDATE};
use crate::tasks::display::SCREEN_BUFFER;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: DisplayConfig) {
    info!("Controller task started");

    let mut controller = DisplayController::new(Screen::new(), &config);
    publish_screen(&mut controller).await;
    info!("Showing welcome text: {}", config.welcome_text.as_str());

    loop {
        wait_input().await;

        while let Some(input) = next_input().await {
            handle_input(&mut controller, input);
        }

        publish_screen(&mut controller).await;
    }
}

/// Apply one input and log what it did
fn handle_input(controller: &mut DisplayController<Screen>, input: Inbound) {
    if let Some(outcome) = input.apply(controller) {
        match outcome.reason() {
            Some(reason) => warn!("Link {:?}, reason {:?}", outcome, reason),
            None => debug!("Link {:?}", outcome),
        }
    }

    match controller.current_sentiment() {
        Some(sentiment) => debug!("View: {:?}, face {}", controller.view(), sentiment.label()),
        None => debug!("View: {:?}", controller.view()),
    }
}

/// Copy the screen to the display task if it changed
async fn publish_screen(controller: &mut DisplayController<Screen>) {
    if !controller.take_dirty() {
        return;
    }

    {
        let mut buffer = SCREEN_BUFFER.lock().await;
        buffer.clone_from(controller.tree());
    }
    SCREEN_UPDATE.signal(());
}
