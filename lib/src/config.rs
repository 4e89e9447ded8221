use crate::error::{ConvertError, Result};
use crate::ramp::Ramp;

/// Output width used when the caller does not pick one
pub const DEFAULT_OUTPUT_WIDTH: u32 = 100;

/// Typical glyph width / height ratio for monospace fonts
pub const DEFAULT_FONT_ASPECT_RATIO: f64 = 0.6;

/// Configuration for text conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Characters per output line, default 100
    pub output_width: u32,
    /// Glyphs from densest to sparsest
    pub ramp: Ramp,
    /// Assumed glyph width / height, default 0.6
    pub font_aspect_ratio: f64,
    /// Whether callers should produce a diagnostic trace, default false
    pub diagnostics: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_WIDTH,
            ramp: Ramp::default(),
            font_aspect_ratio: DEFAULT_FONT_ASPECT_RATIO,
            diagnostics: false,
        }
    }
}

impl ConverterConfig {
    /// Checks the parameters that do not depend on the image
    pub fn validate(&self) -> Result<()> {
        if self.output_width < 1 {
            return Err(ConvertError::invalid(format!(
                "output width must be >= 1, got {}",
                self.output_width
            )));
        }
        if !self.font_aspect_ratio.is_finite() || self.font_aspect_ratio <= 0.0 {
            return Err(ConvertError::invalid(format!(
                "font aspect ratio must be a positive number, got {}",
                self.font_aspect_ratio
            )));
        }
        Ok(())
    }
}
