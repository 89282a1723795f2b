//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod controller;
pub mod display;
pub mod link_rx;
pub mod link_tx;

pub use buttons::{button_task, Buttons};
pub use controller::controller_task;
pub use display::{display_task, Panel};
pub use link_rx::link_rx_task;
pub use link_tx::link_tx_task;
