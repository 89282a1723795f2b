//! Collaborator traits
//!
//! These traits define the interface between the display controller
//! and the platform that actually puts pixels on the screen.

pub mod render;

pub use render::{ImageResource, Redraw, RenderTree};
