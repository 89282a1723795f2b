//! `embedded-graphics` backend
//!
//! Draws the screen into any monochrome [`DrawTarget`], such as an OLED
//! frame buffer or a `MockDisplay` in tests.

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::backend::{Bitmap, DisplayBackend, DisplayError, TextFrame};

/// Display backend over a monochrome draw target
pub struct Canvas<D> {
    target: D,
    ready: bool,
}

impl<D> Canvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            ready: true,
        }
    }

    /// Mark the panel as (not) initialised
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn inner(&self) -> &D {
        &self.target
    }

    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplayBackend for Canvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, frame: TextFrame, text: &str) -> Result<(), DisplayError> {
        let (width, height) = self.dimensions();
        if frame.y >= height || frame.height == 0 {
            return Err(DisplayError::InvalidCoordinates);
        }

        let character_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        let centre = Point::new(
            i32::from(width / 2),
            i32::from(frame.y) + i32::from(frame.height / 2),
        );

        Text::with_text_style(text, centre, character_style, text_style)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn draw_bitmap(&mut self, bitmap: Bitmap) -> Result<(), DisplayError> {
        if bitmap.width == 0 {
            return Err(DisplayError::InvalidCoordinates);
        }

        let raw = ImageRaw::<BinaryColor>::new(bitmap.data, bitmap.width);
        Image::new(&raw, Point::zero())
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (
            u16::try_from(size.width).unwrap_or(u16::MAX),
            u16::try_from(size.height).unwrap_or(u16::MAX),
        )
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
