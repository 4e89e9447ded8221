//! Cell grid geometry
//!
//! Cell sizes stay real-valued so rounding error does not build up across
//! rows and columns. Two integer conversions happen, each with a fixed rule:
//!
//! * cell origins and per-cell sample counts truncate toward zero
//! * the output height rounds half to even (`2.5 -> 2`, `3.5 -> 4`)

use crate::error::{ConvertError, Result};

/// Grid derived from an image size, an output width and a font aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub image_width: u32,
    pub image_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    /// Source pixels per output column
    pub cell_width: f64,
    /// Source pixels per output row
    pub cell_height: f64,
}

impl Geometry {
    /// Derive the grid, rejecting inputs that would leave cells without samples
    pub fn new(
        image_width: u32,
        image_height: u32,
        output_width: u32,
        font_aspect_ratio: f64,
    ) -> Result<Self> {
        if image_width == 0 || image_height == 0 {
            return Err(ConvertError::invalid(format!(
                "image must not be empty, got {}x{}",
                image_width, image_height
            )));
        }
        if output_width < 1 {
            return Err(ConvertError::invalid("output width must be >= 1"));
        }
        if output_width > image_width {
            return Err(ConvertError::invalid(format!(
                "output width must be <= image width ({} > {})",
                output_width, image_width
            )));
        }
        if !font_aspect_ratio.is_finite() || font_aspect_ratio <= 0.0 {
            return Err(ConvertError::invalid(format!(
                "font aspect ratio must be a positive number, got {}",
                font_aspect_ratio
            )));
        }

        let cell_width = image_width as f64 / output_width as f64;
        let cell_height = cell_width / font_aspect_ratio;

        if cell_height < 1.0 {
            return Err(ConvertError::invalid(format!(
                "cells would be {:.3} pixels tall; lower the output width or the font aspect ratio",
                cell_height
            )));
        }

        let output_height = (image_height as f64 / cell_height).round_ties_even() as u32;

        Ok(Self {
            image_width,
            image_height,
            output_width,
            output_height,
            cell_width,
            cell_height,
        })
    }

    /// Real-valued top-left corner of the cell at `(row, column)`
    pub fn cell_offset(&self, row: u32, column: u32) -> (f64, f64) {
        (column as f64 * self.cell_width, row as f64 * self.cell_height)
    }

    /// Top-left source pixel of the cell at `(row, column)`
    pub fn cell_origin(&self, row: u32, column: u32) -> (u32, u32) {
        let (x, y) = self.cell_offset(row, column);
        (x as u32, y as u32)
    }

    /// Sample offsets per cell along x
    pub fn samples_across(&self) -> u32 {
        self.cell_width as u32
    }

    /// Sample offsets per cell along y
    pub fn samples_down(&self) -> u32 {
        self.cell_height as u32
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.image_width && y < self.image_height
    }
}
