//! Configuration layering: built-in defaults, then an optional TOML file,
//! then command-line flags.
//!
//! ```toml
//! [convert]
//! width = 120
//! ramp = "@%#*+=-:. "
//! aspect_ratio = 0.55
//! diagnostics = false
//! ```

use ascii_txt::{ConverterConfig, Ramp};
use serde::Deserialize;
use std::path::Path;

use crate::args::Args;
use crate::error::CliError;

/// Settings file structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    #[serde(default)]
    pub convert: ConvertSettings,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConvertSettings {
    pub width: Option<u32>,
    pub ramp: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub diagnostics: Option<bool>,
}

impl FileSettings {
    /// Load settings from an explicitly named file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Merge defaults, file settings and flags into a validated converter config
pub fn resolve(args: &Args, file: &FileSettings) -> Result<ConverterConfig, CliError> {
    let mut config = ConverterConfig::default();
    let section = &file.convert;

    if let Some(width) = section.width {
        config.output_width = width;
    }
    if let Some(ramp) = &section.ramp {
        config.ramp = Ramp::new(ramp).map_err(CliError::Setting)?;
    }
    if let Some(ratio) = section.aspect_ratio {
        config.font_aspect_ratio = ratio;
    }
    if let Some(diagnostics) = section.diagnostics {
        config.diagnostics = diagnostics;
    }

    if let Some(width) = args.width {
        config.output_width = width;
    }
    if let Some(ramp) = &args.ramp {
        config.ramp = Ramp::new(ramp).map_err(CliError::Setting)?;
    }
    if let Some(ratio) = args.aspect {
        config.font_aspect_ratio = ratio;
    }
    if args.diagnostics {
        config.diagnostics = true;
    }

    config.validate().map_err(CliError::Setting)?;
    Ok(config)
}
