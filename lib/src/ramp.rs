//! Character ramps
//!
//! A ramp lists glyphs from the visually densest (index 0) to the sparsest
//! (last index, usually a space). Dark cells land near the start, bright
//! cells near the end.

use crate::error::{ConvertError, Result};
use std::fmt;
use std::str::FromStr;

/// Default 10-level ramp, densest to blank
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// An ordered, non-empty character ramp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string, one glyph per `char`
    ///
    /// # Errors
    /// `InvalidInput` if `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(ConvertError::invalid("ramp must contain at least one character"));
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Ramp index for a brightness value
    ///
    /// `floor(brightness * len)`, with brightness clamped to [0.0, 1.0]
    /// and exactly 1.0 pulled back onto the last glyph.
    pub fn index_for(&self, brightness: f64) -> usize {
        let len = self.chars.len();
        let brightness = if brightness.is_nan() {
            0.0
        } else {
            brightness.clamp(0.0, 1.0)
        };

        let index = (brightness * len as f64).floor() as usize;
        index.min(len - 1)
    }

    /// Glyph for a brightness value
    pub fn char_for(&self, brightness: f64) -> char {
        self.chars[self.index_for(brightness)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl FromStr for Ramp {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Ramp::new(s)
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
