//! ASCII Text - image to plain-text ASCII art converter
//!
//! This library lays a grid of cells over an image, averages the brightness
//! of the pixels in each cell and picks a glyph from a density ramp for it.
//! The result is a block of text that resembles the image when shown in a
//! fixed-width font.
//!
//! # Example
//! ```no_run
//! use ascii_txt::{convert, ConverterConfig, LightnessMap, LineEnding};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let lightness = LightnessMap::from(&input);
//! let art = convert(&lightness, &ConverterConfig::default()).unwrap();
//! art.save("photo.txt", LineEnding::Native).unwrap();
//! ```

pub mod art;
pub mod brightness;
pub mod config;
pub mod converter;
pub mod error;
pub mod geometry;
pub mod ramp;
pub mod trace;

// Re-export main types for convenience
pub use art::{AsciiArt, LineEnding};
pub use brightness::{BrightnessSource, LightnessMap, hsl_lightness};
pub use config::ConverterConfig;
pub use converter::{AsciiConverter, convert, convert_traced};
pub use error::ConvertError;
pub use geometry::Geometry;
pub use ramp::{DEFAULT_RAMP, Ramp};
pub use trace::{DiagnosticSink, TraceEvent, TraceWriter};
