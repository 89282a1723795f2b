//! Display state machine
//!
//! The view the device shows is a pure function of the previous view
//! and an event; the controller carries out the matching render actions.

pub mod events;
pub mod machine;

pub use events::{Event, TransportStatus};
pub use machine::{DisplayState, View};
