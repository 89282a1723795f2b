//! Link framing between the companion bridge and the device.
//!
//! Frame layout:
//! - START (1 byte): [`FRAME_START`]
//! - LENGTH (1 byte): payload length, at most [`MAX_PAYLOAD_SIZE`]
//! - TYPE (1 byte): message type, see [`crate::messages`]
//! - PAYLOAD (LENGTH bytes)
//! - CHECKSUM (1 byte): XOR over LENGTH, TYPE and the payload

use heapless::Vec;

/// Synchronization byte that opens every frame
pub const FRAME_START: u8 = 0xAA;

/// Largest payload a single frame may carry
pub const MAX_PAYLOAD_SIZE: usize = 250;

/// START + LENGTH + TYPE + payload + CHECKSUM
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + 4;

/// Framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload longer than [`MAX_PAYLOAD_SIZE`]
    PayloadTooLarge,
    /// Trailing checksum did not match
    InvalidChecksum,
    /// Length byte or message type is not acceptable
    InvalidFrame,
    /// Output buffer cannot hold the encoded frame
    BufferTooSmall,
}

/// One link frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Type-specific payload
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Build a frame, rejecting oversized payloads
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Build a frame without payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// Number of bytes [`Frame::encode`] writes
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + 4
    }

    fn checksum(length: u8, msg_type: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ msg_type, |acc, &b| acc ^ b)
    }

    /// Write the frame into `buffer`, returning the number of bytes used
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        if buffer.len() < len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        let body_end = 3 + self.payload.len();

        buffer[0] = FRAME_START;
        buffer[1] = length;
        buffer[2] = self.msg_type;
        buffer[3..body_end].copy_from_slice(&self.payload);
        buffer[body_end] = Self::checksum(length, self.msg_type, &self.payload);

        Ok(len)
    }

    /// Encode into an owned buffer
    pub fn to_bytes(&self) -> Vec<u8, MAX_FRAME_SIZE> {
        let mut out = Vec::new();
        // Capacity always covers a valid frame
        let _ = out.resize(self.encoded_len(), 0);
        let _ = self.encode(&mut out);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Sync,
    Length,
    Type,
    Payload,
    Checksum,
}

/// Byte-at-a-time frame parser
///
/// Bytes that arrive outside a frame are skipped until the next
/// [`FRAME_START`], so the parser recovers from line noise and from a
/// bridge that was reset mid-frame.
#[derive(Debug, Clone)]
pub struct FrameParser {
    stage: Stage,
    length: u8,
    msg_type: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            stage: Stage::Sync,
            length: 0,
            msg_type: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partially received frame
    pub fn reset(&mut self) {
        self.stage = Stage::Sync;
        self.length = 0;
        self.msg_type = 0;
        self.payload.clear();
    }

    /// Returns true while a frame is partially received
    pub fn in_frame(&self) -> bool {
        self.stage != Stage::Sync
    }

    /// Feed one byte
    ///
    /// `Ok(Some(frame))` once a frame with a valid checksum completes,
    /// `Ok(None)` while more bytes are needed. Errors reset the parser.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.stage {
            Stage::Sync => {
                if byte == FRAME_START {
                    self.stage = Stage::Length;
                }
                Ok(None)
            }
            Stage::Length => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                self.length = byte;
                self.stage = Stage::Type;
                Ok(None)
            }
            Stage::Type => {
                self.msg_type = byte;
                self.payload.clear();
                self.stage = if self.length == 0 {
                    Stage::Checksum
                } else {
                    Stage::Payload
                };
                Ok(None)
            }
            Stage::Payload => {
                // Bounded by the length check above
                let _ = self.payload.push(byte);
                if self.payload.len() == self.length as usize {
                    self.stage = Stage::Checksum;
                }
                Ok(None)
            }
            Stage::Checksum => {
                let expected = Frame::checksum(self.length, self.msg_type, &self.payload);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed bytes until the first complete frame
    ///
    /// Bytes after that frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
