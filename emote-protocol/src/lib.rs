//! Companion Link Protocol
//!
//! This crate defines the UART protocol between the device and the bridge
//! that relays messages from the paired companion device. The bridge owns
//! the radio session; the device only sees framed records and delivery
//! reports.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! INBOX frames carry a [`RawRecord`]: an ordered list of `(key, text)`
//! tuples exactly as the companion sent them.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod events;
pub mod frame;
pub mod messages;
pub mod record;

pub use events::ButtonEvent;
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{DeviceMessage, LinkMessage, MessageError, TransportReason};
pub use record::{RawRecord, RecordError, Tuple, MAX_TUPLES, MAX_VALUE_LEN};
