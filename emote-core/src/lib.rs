//! Board-agnostic core logic for the Emote sentiment display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sentiment classification and inbound message decoding
//! - Display surface registry (one visible surface at a time)
//! - State machine and display controller
//! - Transport event adapter and ordered controller input
//! - Render tree trait implemented by the display layer

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod decode;
pub mod inbound;
pub mod sentiment;
pub mod state;
pub mod surface;
pub mod traits;
pub mod transport;

pub use config::DisplayConfig;
pub use controller::DisplayController;
pub use decode::{decode, DecodedMessage};
pub use inbound::{Inbound, InboundQueue};
pub use sentiment::{classify, Sentiment};
pub use state::{DisplayState, Event, TransportStatus, View};
pub use surface::{SurfaceId, SurfaceRegistry};
pub use traits::{ImageResource, Redraw, RenderTree};
pub use transport::{LinkOutcome, TransportEventAdapter};
