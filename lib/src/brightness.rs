//! Per-pixel brightness access
//!
//! The converter never touches a decoder directly. Anything that can report
//! its size and a brightness in [0.0, 1.0] for a pixel can be converted.

use crate::error::{ConvertError, Result};
use image::{DynamicImage, GenericImageView, GrayImage, RgbImage, RgbaImage};
use rayon::prelude::*;

/// Read-only brightness view of a raster image
pub trait BrightnessSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Brightness of the pixel at `(x, y)` in [0.0, 1.0]
    ///
    /// Callers stay within `width() x height()`.
    fn brightness_at(&self, x: u32, y: u32) -> f64;
}

/// HSL lightness of an 8-bit RGB triple
///
/// Formula: L = (max(R, G, B) + min(R, G, B)) / 2 on channels scaled to [0, 1].
/// Pure red and pure white therefore differ (0.5 vs 1.0), unlike a plain
/// channel average.
pub fn hsl_lightness(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b) as f64 / 255.0;
    let min = r.min(g).min(b) as f64 / 255.0;
    (max + min) / 2.0
}

impl BrightnessSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn brightness_at(&self, x: u32, y: u32) -> f64 {
        let pixel = self.get_pixel(x, y);
        hsl_lightness(pixel[0], pixel[1], pixel[2])
    }
}

impl BrightnessSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn brightness_at(&self, x: u32, y: u32) -> f64 {
        let pixel = self.get_pixel(x, y);
        hsl_lightness(pixel[0], pixel[1], pixel[2])
    }
}

impl BrightnessSource for GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn brightness_at(&self, x: u32, y: u32) -> f64 {
        self.get_pixel(x, y)[0] as f64 / 255.0
    }
}

impl BrightnessSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn brightness_at(&self, x: u32, y: u32) -> f64 {
        let pixel = self.get_pixel(x, y);
        hsl_lightness(pixel[0], pixel[1], pixel[2])
    }
}

/// Precomputed brightness plane, row-major
///
/// Handy when the source pixel format is expensive to query per sample
/// (e.g. `DynamicImage`), and for building synthetic inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct LightnessMap {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl LightnessMap {
    /// Wrap an existing row-major brightness buffer
    ///
    /// # Errors
    /// `InvalidInput` if `values.len() != width * height`.
    pub fn new(width: u32, height: u32, values: Vec<f64>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(ConvertError::invalid(format!(
                "lightness buffer has {} values, expected {}x{} = {}",
                values.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Build a map by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Same brightness everywhere
    pub fn uniform(width: u32, height: u32, brightness: f64) -> Self {
        Self::from_fn(width, height, |_, _| brightness)
    }

    /// Compute HSL lightness for every pixel of an RGBA image
    ///
    /// Rows are processed in parallel.
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut values = vec![0.0; width as usize * height as usize];

        if width > 0 {
            values
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, value) in row.iter_mut().enumerate() {
                        let pixel = img.get_pixel(x as u32, y as u32);
                        *value = hsl_lightness(pixel[0], pixel[1], pixel[2]);
                    }
                });
        }

        Self {
            width,
            height,
            values,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl From<&DynamicImage> for LightnessMap {
    fn from(img: &DynamicImage) -> Self {
        LightnessMap::from_rgba(&img.to_rgba8())
    }
}

impl BrightnessSource for LightnessMap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn brightness_at(&self, x: u32, y: u32) -> f64 {
        self.values[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, Rgba};

    #[test]
    fn test_lightness_black() {
        assert_eq!(hsl_lightness(0, 0, 0), 0.0);
    }

    #[test]
    fn test_lightness_white() {
        assert_eq!(hsl_lightness(255, 255, 255), 1.0);
    }

    #[test]
    fn test_lightness_pure_red() {
        // max = 1.0, min = 0.0
        assert_eq!(hsl_lightness(255, 0, 0), 0.5);
    }

    #[test]
    fn test_lightness_ignores_middle_channel() {
        assert_eq!(hsl_lightness(200, 10, 100), hsl_lightness(200, 10, 190));
    }

    #[test]
    fn test_rgba_source() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 0]));
        assert_eq!(BrightnessSource::width(&img), 3);
        assert_eq!(BrightnessSource::height(&img), 2);
        assert_eq!(img.brightness_at(2, 1), 1.0);
    }

    #[test]
    fn test_rgb_and_gray_sources() {
        let rgb = RgbImage::from_pixel(1, 1, Rgb([0, 255, 0]));
        assert_eq!(rgb.brightness_at(0, 0), 0.5);

        let gray = GrayImage::from_pixel(1, 1, Luma([51]));
        assert!((gray.brightness_at(0, 0) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_dynamic_matches_rgba() {
        let mut rgba = RgbaImage::new(4, 4);
        for (x, y, pixel) in rgba.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 60) as u8, (y * 60) as u8, 30, 255]);
        }
        let dynamic = DynamicImage::ImageRgba8(rgba.clone());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(dynamic.brightness_at(x, y), rgba.brightness_at(x, y));
            }
        }
    }

    #[test]
    fn test_map_from_rgba_matches_direct_access() {
        let mut rgba = RgbaImage::new(7, 5);
        for (x, y, pixel) in rgba.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 30) as u8, 255 - (y * 40) as u8, 90, 255]);
        }
        let map = LightnessMap::from_rgba(&rgba);
        assert_eq!(map.width(), 7);
        assert_eq!(map.height(), 5);
        for y in 0..5 {
            for x in 0..7 {
                assert_eq!(map.brightness_at(x, y), rgba.brightness_at(x, y));
            }
        }
    }

    #[test]
    fn test_map_row_major_layout() {
        let map = LightnessMap::from_fn(3, 2, |x, y| (y * 3 + x) as f64 / 10.0);
        assert_eq!(map.brightness_at(0, 1), 0.3);
        assert_eq!(map.values().len(), 6);
    }

    #[test]
    fn test_map_new_rejects_wrong_length() {
        assert!(LightnessMap::new(2, 2, vec![0.0; 3]).is_err());
        assert!(LightnessMap::new(2, 2, vec![0.0; 4]).is_ok());
    }

    #[test]
    fn test_map_from_empty_image() {
        let map = LightnessMap::from_rgba(&RgbaImage::new(0, 0));
        assert!(map.values().is_empty());
    }
}
