//! Display backend trait
//!
//! Defines the interface for the pixel display behind the screen.

use emote_core::ImageResource;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Bitmap store has no asset for the requested image
    MissingAsset,
}

/// Horizontal band the text surface is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextFrame {
    /// Top edge in pixels
    pub y: u16,
    /// Band height in pixels
    pub height: u16,
}

/// Placement of the surfaces on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    pub text: TextFrame,
}

impl Layout {
    /// Vertically centred 10 px band on a 64 px panel
    pub const DEFAULT: Layout = Layout {
        text: TextFrame { y: 27, height: 10 },
    };

    pub const fn new(text_y: u16, text_height: u16) -> Self {
        Self {
            text: TextFrame {
                y: text_y,
                height: text_height,
            },
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 1 bit per pixel image, rows packed MSB first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    pub data: &'static [u8],
    pub width: u32,
}

impl Bitmap {
    pub const fn new(data: &'static [u8], width: u32) -> Self {
        Self { data, width }
    }

    /// Height implied by the data length
    pub fn height(&self) -> u32 {
        let stride = self.width.div_ceil(8);
        if stride == 0 {
            0
        } else {
            self.data.len() as u32 / stride
        }
    }
}

/// Source of the face bitmaps
pub trait BitmapStore {
    /// Look up the bitmap for an image resource
    fn bitmap(&self, image: ImageResource) -> Option<Bitmap>;
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering the screen.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw one line of text centred inside `frame`
    fn draw_text(&mut self, frame: TextFrame, text: &str) -> Result<(), DisplayError>;

    /// Draw a bitmap at the origin, unscaled
    fn draw_bitmap(&mut self, bitmap: Bitmap) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
