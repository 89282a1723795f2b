//! Button task
//!
//! Watches the three buttons and queues debounced presses for the
//! controller. Buttons are active low with pull-ups.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use emote_core::Inbound;
use emote_protocol::ButtonEvent;

use crate::channels::post_input;

/// Button inputs in `ButtonEvent::ALL` order (Select, Up, Down)
pub type Buttons = [Input<'static>; 3];

/// Button task - one press event per debounced falling edge
#[embassy_executor::task]
pub async fn button_task(mut buttons: Buttons, debounce_ms: u64) {
    info!("Button task started");

    let debounce = Duration::from_millis(debounce_ms);

    loop {
        let index = {
            let [select, up, down] = &mut buttons;
            match select3(
                select.wait_for_falling_edge(),
                up.wait_for_falling_edge(),
                down.wait_for_falling_edge(),
            )
            .await
            {
                Either3::First(()) => 0,
                Either3::Second(()) => 1,
                Either3::Third(()) => 2,
            }
        };

        Timer::after(debounce).await;

        let input = &mut buttons[index];
        if input.is_high() {
            trace!("Bounce ignored");
            continue;
        }

        let button = ButtonEvent::ALL[index];
        debug!("Button: {}", button.name());
        post_input(Inbound::Button(button)).await;

        // Wait for release before accepting the next press
        input.wait_for_high().await;
        Timer::after(debounce).await;
    }
}
