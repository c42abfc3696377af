use std::path::PathBuf;

use thiserror::Error;

use crate::prob_input::spec::ProbInputSpec;

/// Loads a probabilistic input specification from a JSON file.
///
/// The specification is only parsed here. Distribution names and parameters
/// are validated when it is turned into a
/// [`ProbInput`](crate::prob_input::multivariate::ProbInput).
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Errors
///
/// * [`IOError::FileNotFound`] if the file cannot be opened
/// * [`IOError::JsonParseError`] if the contents do not describe a
///   [`ProbInputSpec`]
pub fn load_spec(path: impl Into<PathBuf>) -> Result<ProbInputSpec, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Saves a probabilistic input specification as pretty-printed JSON.
///
/// # Errors
///
/// * [`IOError::FileWriteError`] if the file cannot be created
pub fn save_spec(path: impl Into<PathBuf>, spec: &ProbInputSpec) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileWriteError)?;
    serde_json::to_writer_pretty(file, spec).map_err(IOError::JsonParseError)
}

/// Errors raised while reading or writing specification files.
#[derive(Error, Debug)]
pub enum IOError {
    /// The file could not be opened.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file could not be created or written.
    #[error("Failed to write file: {0}")]
    FileWriteError(std::io::Error),

    /// The file contents are not valid JSON for the requested record.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
