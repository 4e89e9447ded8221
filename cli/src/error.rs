use ascii_txt::ConvertError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Setting(#[source] ConvertError),

    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to convert '{}': {source}", path.display())]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: ConvertError,
    },

    #[error("{0}")]
    Usage(String),
}
