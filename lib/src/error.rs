use thiserror::Error;

/// Errors produced by a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A parameter or the image itself cannot produce a valid cell grid.
    /// Raised before any pixel is read.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A cell ended up with no in-bounds samples.
    ///
    /// Geometry validation rules this out, so seeing it means the
    /// geometry checks and the sampling loop disagree.
    #[error("cell at row {row}, column {column} has no pixels to sample")]
    EmptyCellSample { row: u32, column: u32 },

    /// The output or diagnostic sink rejected a write
    #[error("failed to write output: {0}")]
    SinkWrite(#[from] std::io::Error),
}

impl ConvertError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ConvertError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
