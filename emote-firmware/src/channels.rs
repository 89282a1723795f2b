//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use emote_core::{Inbound, InboundQueue};

/// Capacity of the controller input queue
const INPUT_QUEUE_SIZE: usize = 8;

/// Link messages and button presses in arrival order
static INPUT_QUEUE: Mutex<CriticalSectionRawMutex, InboundQueue<INPUT_QUEUE_SIZE>> =
    Mutex::new(InboundQueue::new());

/// Signal that the input queue has something to handle
static INPUT_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a screen update is ready to be drawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal that a heartbeat (PING) was received from the bridge
pub static HEARTBEAT_RECEIVED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Queue an input for the controller, dropping it if the queue is full
pub async fn post_input(input: Inbound) {
    let result = INPUT_QUEUE.lock().await.push(input);
    match result {
        Ok(()) => INPUT_READY.signal(()),
        Err(input) => warn!("Input queue full, dropping {:?}", input),
    }
}

/// Wait until at least one input is queued
pub async fn wait_input() {
    INPUT_READY.wait().await;
}

/// Take the oldest queued input
pub async fn next_input() -> Option<Inbound> {
    INPUT_QUEUE.lock().await.pop()
}
