//! Converted text grid and how it is written out

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Line terminator used when serialising a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Text produced by one conversion
///
/// Every line holds exactly `width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    width: u32,
    lines: Vec<String>,
}

impl AsciiArt {
    pub(crate) fn new(width: u32, lines: Vec<String>) -> Self {
        Self { width, lines }
    }

    /// Characters per line
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Join the lines, terminating each one (the last included)
    pub fn to_text(&self, ending: LineEnding) -> String {
        let ending = ending.as_str();
        let capacity: usize = self.lines.iter().map(|l| l.len() + ending.len()).sum();
        let mut text = String::with_capacity(capacity);
        for line in &self.lines {
            text.push_str(line);
            text.push_str(ending);
        }
        text
    }

    /// Write the whole grid to `writer` in one go
    pub fn write_to<W: Write>(&self, mut writer: W, ending: LineEnding) -> Result<()> {
        writer.write_all(self.to_text(ending).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the grid to a file, replacing any existing content
    pub fn save(&self, path: impl AsRef<Path>, ending: LineEnding) -> Result<()> {
        std::fs::write(path, self.to_text(ending))?;
        Ok(())
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
