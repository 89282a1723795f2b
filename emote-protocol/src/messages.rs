//! Message types for the companion link
//!
//! Message types are divided into two categories:
//! - Bridge → Device: inbound records and delivery reports, heartbeats
//! - Device → Bridge: channel open request, heartbeat responses

use crate::frame::{Frame, FrameError};
use crate::record::{RawRecord, RecordError};

// Message type IDs: Bridge → Device
pub const MSG_INBOX: u8 = 0x01;
pub const MSG_INBOX_DROPPED: u8 = 0x02;
pub const MSG_OUTBOX_SENT: u8 = 0x03;
pub const MSG_OUTBOX_FAILED: u8 = 0x04;
pub const MSG_PING: u8 = 0x05;

// Message type IDs: Device → Bridge
pub const MSG_OPEN: u8 = 0x20;
pub const MSG_PONG: u8 = 0x21;

/// Why the bridge could not deliver a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportReason {
    /// No acknowledgement from the peer in time
    Timeout,
    /// Peer refused the message
    Rejected,
    /// Companion device is not connected
    NotConnected,
    /// Bridge is still busy with a previous message
    Busy,
    /// Message did not fit the negotiated buffer
    BufferOverflow,
    /// Bytes on the link did not form a valid message
    Malformed,
    /// Code not known to this firmware
    Other(u8),
}

impl TransportReason {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x01 => TransportReason::Timeout,
            0x02 => TransportReason::Rejected,
            0x03 => TransportReason::NotConnected,
            0x04 => TransportReason::Busy,
            0x05 => TransportReason::BufferOverflow,
            0x06 => TransportReason::Malformed,
            other => TransportReason::Other(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            TransportReason::Timeout => 0x01,
            TransportReason::Rejected => 0x02,
            TransportReason::NotConnected => 0x03,
            TransportReason::Busy => 0x04,
            TransportReason::BufferOverflow => 0x05,
            TransportReason::Malformed => 0x06,
            TransportReason::Other(code) => code,
        }
    }
}

/// Errors turning a frame into a [`LinkMessage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Unknown message type
    UnknownType(u8),
    /// Payload shorter than the message type requires
    MissingPayload,
    /// INBOX payload is not a valid record
    Record(RecordError),
}

impl From<RecordError> for MessageError {
    fn from(err: RecordError) -> Self {
        MessageError::Record(err)
    }
}

/// Messages from the bridge to the device
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkMessage {
    /// A record from the companion device
    Inbox(RawRecord),
    /// An inbound message was lost before it reached the device
    InboxDropped(TransportReason),
    /// The last outbound message was acknowledged
    OutboxSent,
    /// The last outbound message could not be delivered
    OutboxFailed(TransportReason),
    /// Heartbeat request
    Ping,
}

fn reason_byte(frame: &Frame) -> Result<TransportReason, MessageError> {
    frame
        .payload
        .first()
        .map(|&b| TransportReason::from_byte(b))
        .ok_or(MessageError::MissingPayload)
}

impl LinkMessage {
    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, MessageError> {
        match frame.msg_type {
            MSG_INBOX => Ok(LinkMessage::Inbox(RawRecord::parse(&frame.payload)?)),
            MSG_INBOX_DROPPED => Ok(LinkMessage::InboxDropped(reason_byte(frame)?)),
            MSG_OUTBOX_SENT => Ok(LinkMessage::OutboxSent),
            MSG_OUTBOX_FAILED => Ok(LinkMessage::OutboxFailed(reason_byte(frame)?)),
            MSG_PING => Ok(LinkMessage::Ping),
            other => Err(MessageError::UnknownType(other)),
        }
    }

    /// Encode this message into a frame (for testing or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            LinkMessage::Inbox(record) => {
                let mut buf = [0u8; crate::MAX_PAYLOAD_SIZE];
                let len = record
                    .encode(&mut buf)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                Frame::new(MSG_INBOX, &buf[..len])
            }
            LinkMessage::InboxDropped(reason) => Frame::new(MSG_INBOX_DROPPED, &[reason.to_byte()]),
            LinkMessage::OutboxSent => Ok(Frame::empty(MSG_OUTBOX_SENT)),
            LinkMessage::OutboxFailed(reason) => Frame::new(MSG_OUTBOX_FAILED, &[reason.to_byte()]),
            LinkMessage::Ping => Ok(Frame::empty(MSG_PING)),
        }
    }
}

/// Messages from the device to the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMessage {
    /// Open the message channel with the given buffer sizes in bytes
    Open { inbox_size: u16, outbox_size: u16 },
    /// Heartbeat response
    Pong,
}

impl DeviceMessage {
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            DeviceMessage::Open {
                inbox_size,
                outbox_size,
            } => {
                let [in_lo, in_hi] = inbox_size.to_le_bytes();
                let [out_lo, out_hi] = outbox_size.to_le_bytes();
                Frame::new(MSG_OPEN, &[in_lo, in_hi, out_lo, out_hi])
            }
            DeviceMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }
}
