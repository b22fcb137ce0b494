//! `embedded-graphics` integration
//!
//! Pixels drawn through [`DrawTarget`] go through the same clipping and
//! backend as the native primitives, so third-party shapes, fonts and images
//! land in the frame buffer in buffered mode.
use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;

use super::Display;
use crate::color::Color;
use crate::hal::{Hal, Panel};

impl<H: Hal, P: Panel> OriginDimensions for Display<'_, H, P> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }
}

impl<H: Hal, P: Panel> DrawTarget for Display<'_, H, P> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.plot(point.x, point.y, Color::from(color));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let width = area.size.width as i32;
        for row in 0..area.size.height as i32 {
            self.hspan(area.top_left.x, area.top_left.y + row, width, Color::from(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for row in 0..i32::from(self.height) {
            self.hspan(0, row, i32::from(self.width), Color::from(color));
        }
        Ok(())
    }
}
