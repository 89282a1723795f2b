//! Render tree trait for the single display surface

use crate::surface::SurfaceId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named bitmap resources the image surface can paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ImageResource {
    Smiley,
    Frown,
    Neutral,
}

/// The renderable tree behind the display
///
/// Implemented by the display layer. The core never draws directly; it
/// only attaches and detaches whole surfaces through
/// [`crate::surface::SurfaceRegistry`], which is the sole caller of these
/// methods and keeps at most one surface attached.
///
/// Attaching an image surface means painting
/// `sentiment.image()` into it at its natural size.
pub trait RenderTree {
    /// Make `surface` visible
    fn attach(&mut self, surface: SurfaceId);

    /// Remove `surface` from the display
    fn detach(&mut self, surface: SurfaceId);

    /// Replace the content of the text surface
    ///
    /// Takes effect whether or not the text surface is attached.
    fn set_text(&mut self, text: &str);

    /// Currently attached surface, if any
    fn attached(&self) -> Option<SurfaceId>;
}

/// Redraw tracking for trees that buffer their output
///
/// Lets the owner of a controller learn that the tree changed without
/// handing out mutable access to it.
pub trait Redraw {
    /// Clear the redraw flag, returning whether it was set
    fn take_dirty(&mut self) -> bool;
}
