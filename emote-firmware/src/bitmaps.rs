//! Built-in face bitmaps
//!
//! 32x32 pixels, 1 bit per pixel, rows packed MSB first.

use emote_core::ImageResource;
use emote_display::{Bitmap, BitmapStore};

/// Face width in pixels
pub const FACE_SIZE: u32 = 32;

/// Bytes per face (4 bytes per row)
const FACE_BYTES: usize = (FACE_SIZE as usize / 8) * FACE_SIZE as usize;

/// Smiling face, shown for happy messages
#[rustfmt::skip]
static SMILEY: [u8; FACE_BYTES] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00011111, 0b11111000, 0b00000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000001, 0b11100000, 0b00000111, 0b10000000,
    0b00000011, 0b10000000, 0b00000001, 0b11000000,
    0b00000111, 0b00000000, 0b00000000, 0b11100000,
    0b00001100, 0b00000000, 0b00000000, 0b00110000,
    0b00011100, 0b00000000, 0b00000000, 0b00111000,
    0b00111000, 0b00000000, 0b00000000, 0b00011100,
    0b00110000, 0b00000000, 0b00000000, 0b00001100,
    0b00110000, 0b00110000, 0b00001100, 0b00001100,
    0b01100000, 0b01111000, 0b00011110, 0b00000110,
    0b01100000, 0b01111000, 0b00011110, 0b00000110,
    0b01100000, 0b00110000, 0b00001100, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b01000000, 0b00000010, 0b00000110,
    0b01100000, 0b01110000, 0b00001110, 0b00000110,
    0b00110000, 0b00110000, 0b00001100, 0b00001100,
    0b00110000, 0b00001100, 0b00110000, 0b00001100,
    0b00111000, 0b00000011, 0b11000000, 0b00011100,
    0b00011100, 0b00000000, 0b00000000, 0b00111000,
    0b00001100, 0b00000000, 0b00000000, 0b00110000,
    0b00000111, 0b00000000, 0b00000000, 0b11100000,
    0b00000011, 0b10000000, 0b00000001, 0b11000000,
    0b00000001, 0b11100000, 0b00000111, 0b10000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000000, 0b00011111, 0b11111000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

/// Frowning face, shown for sad messages
#[rustfmt::skip]
static FROWN: [u8; FACE_BYTES] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00011111, 0b11111000, 0b00000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000001, 0b11100000, 0b00000111, 0b10000000,
    0b00000011, 0b10000000, 0b00000001, 0b11000000,
    0b00000111, 0b00000000, 0b00000000, 0b11100000,
    0b00001100, 0b00000000, 0b00000000, 0b00110000,
    0b00011100, 0b00000000, 0b00000000, 0b00111000,
    0b00111000, 0b00000000, 0b00000000, 0b00011100,
    0b00110000, 0b00000000, 0b00000000, 0b00001100,
    0b00110000, 0b00110000, 0b00001100, 0b00001100,
    0b01100000, 0b01111000, 0b00011110, 0b00000110,
    0b01100000, 0b01111000, 0b00011110, 0b00000110,
    0b01100000, 0b00110000, 0b00001100, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000011, 0b11000000, 0b00000110,
    0b00110000, 0b00001100, 0b00110000, 0b00001100,
    0b00110000, 0b00110000, 0b00001100, 0b00001100,
    0b00111000, 0b01110000, 0b00001110, 0b00011100,
    0b00011100, 0b01000000, 0b00000010, 0b00111000,
    0b00001100, 0b00000000, 0b00000000, 0b00110000,
    0b00000111, 0b00000000, 0b00000000, 0b11100000,
    0b00000011, 0b10000000, 0b00000001, 0b11000000,
    0b00000001, 0b11100000, 0b00000111, 0b10000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000000, 0b00011111, 0b11111000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

/// Straight face, shown for everything else
#[rustfmt::skip]
static NEUTRAL: [u8; FACE_BYTES] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00011111, 0b11111000, 0b00000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000001, 0b11100000, 0b00000111, 0b10000000,
    0b00000011, 0b10000000, 0b00000001, 0b11000000,
    0b00000111, 0b00000000, 0b00000000, 0b11100000,
    0b00001100, 0b00000000, 0b00000000, 0b00110000,
    0b00011100, 0b00000000, 0b00000000, 0b00111000,
    0b00111000, 0b00000000, 0b00000000, 0b00011100,
    0b00110000, 0b00000000, 0b00000000, 0b00001100,
    0b00110000, 0b00110000, 0b00001100, 0b00001100,
    0b01100000, 0b01111000, 0b00011110, 0b00000110,
    0b01100000, 0b01111000, 0b00011110, 0b00000110,
    0b01100000, 0b00110000, 0b00001100, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b01100000, 0b00000000, 0b00000000, 0b00000110,
    0b00110000, 0b00111111, 0b11111100, 0b00001100,
    0b00110000, 0b00111111, 0b11111100, 0b00001100,
    0b00111000, 0b00000000, 0b00000000, 0b00011100,
    0b00011100, 0b00000000, 0b00000000, 0b00111000,
    0b00001100, 0b00000000, 0b00000000, 0b00110000,
    0b00000111, 0b00000000, 0b00000000, 0b11100000,
    0b00000011, 0b10000000, 0b00000001, 0b11000000,
    0b00000001, 0b11100000, 0b00000111, 0b10000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000000, 0b00011111, 0b11111000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

/// Faces compiled into the firmware
pub struct Faces;

impl BitmapStore for Faces {
    fn bitmap(&self, image: ImageResource) -> Option<Bitmap> {
        let data: &'static [u8] = match image {
            ImageResource::Smiley => &SMILEY,
            ImageResource::Frown => &FROWN,
            ImageResource::Neutral => &NEUTRAL,
        };
        Some(Bitmap::new(data, FACE_SIZE))
    }
}
