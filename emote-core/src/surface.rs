//! Display surface registry
//!
//! The device has one text surface and one image surface per sentiment.
//! They are mutually exclusive: the registry detaches whatever is shown
//! before attaching the next surface, so two visuals never overlap.

use crate::sentiment::Sentiment;
use crate::traits::{Redraw, RenderTree};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the mutually exclusive surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceId {
    /// Single line of centred text
    Text,
    /// Full-screen face for a sentiment
    Image(Sentiment),
}

impl SurfaceId {
    pub fn sentiment(&self) -> Option<Sentiment> {
        match self {
            SurfaceId::Image(sentiment) => Some(*sentiment),
            SurfaceId::Text => None,
        }
    }
}

/// Owner of the render tree
///
/// Exactly one surface is attached from construction onwards.
#[derive(Debug, Clone)]
pub struct SurfaceRegistry<T: RenderTree> {
    tree: T,
    current: SurfaceId,
}

impl<T: RenderTree> SurfaceRegistry<T> {
    /// Take ownership of `tree` and attach `initial`
    ///
    /// Anything the tree had attached before is detached first.
    pub fn new(mut tree: T, initial: SurfaceId) -> Self {
        if let Some(previous) = tree.attached() {
            tree.detach(previous);
        }
        tree.attach(initial);
        Self {
            tree,
            current: initial,
        }
    }

    /// Show `surface`, hiding the current one
    ///
    /// Showing the surface that is already attached does nothing.
    pub fn show(&mut self, surface: SurfaceId) {
        if surface == self.current {
            return;
        }
        self.tree.detach(self.current);
        self.tree.attach(surface);
        self.current = surface;
    }

    /// Set the text surface content, then show it
    pub fn show_text(&mut self, text: &str) {
        self.tree.set_text(text);
        self.show(SurfaceId::Text);
    }

    /// Currently attached surface
    pub fn current(&self) -> SurfaceId {
        self.current
    }

    /// Read access to the render tree
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Clear the tree's redraw flag, returning whether it was set
    pub fn take_dirty(&mut self) -> bool
    where
        T: Redraw,
    {
        self.tree.take_dirty()
    }

    #[cfg(test)]
    pub(crate) fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }
}
