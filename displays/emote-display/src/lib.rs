//! Render tree and display backends for Emote
//!
//! This crate provides:
//! - `Screen`, the in-memory render tree the display controller drives
//! - `DisplayBackend` trait for the physical display
//! - `Canvas`, a backend over any monochrome `embedded-graphics` target
//! - `BitmapStore` trait resolving the face images
//!
//! # Architecture
//!
//! The controller only attaches and detaches surfaces on a `Screen`. A
//! separate display task takes a copy of the screen and renders it
//! through a `DisplayBackend`, so drawing errors never reach the
//! controller.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod graphics;
pub mod screen;

// Re-export key types
pub use backend::{Bitmap, BitmapStore, DisplayBackend, DisplayError, Layout, TextFrame};
pub use graphics::Canvas;
pub use screen::{Screen, TEXT_CAPACITY};
