use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ResampleError – every recoverable failure of a conversion
// ---------------------------------------------------------------------------

/// Failure of one conversion stage. All variants are recoverable and are
/// handed back to the caller, which decides whether to re-prompt.
#[derive(Debug, Error)]
pub enum ResampleError {
    /// One or more required metadata fields are empty.
    #[error("metadata: required field(s) empty: {}", .fields.join(", "))]
    MissingMetadata { fields: Vec<&'static str> },

    /// The table could not be turned into at least one numeric sample.
    #[error("parsing input: {0}")]
    Parse(String),

    /// The input contained no records at all.
    #[error("reading input: {0}")]
    EmptyData(String),

    /// The grid bounds computed from the data do not form a range.
    #[error(
        "building grid: empty wavelength range {min_wl} nm to {max_wl} nm \
         (data outside 300-1100 nm and no matching extrapolation)"
    )]
    Range { min_wl: i64, max_wl: i64 },

    /// The output record could not be serialized.
    #[error("writing output: {0}")]
    Export(String),

    /// Reading or writing a file failed.
    #[error("file access on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Short tag for each [`ResampleError`] variant, used when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingMetadata,
    ParseError,
    EmptyDataError,
    RangeError,
    IoError,
}

impl ResampleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResampleError::MissingMetadata { .. } => ErrorKind::MissingMetadata,
            ResampleError::Parse(_) => ErrorKind::ParseError,
            ResampleError::EmptyData(_) => ErrorKind::EmptyDataError,
            ResampleError::Range { .. } => ErrorKind::RangeError,
            ResampleError::Export(_) | ResampleError::Io { .. } => ErrorKind::IoError,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResampleError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::MissingMetadata => "Missing Info",
            ErrorKind::ParseError => "Parse Error",
            ErrorKind::EmptyDataError => "Empty Data",
            ErrorKind::RangeError => "Range Error",
            ErrorKind::IoError => "I/O Error",
        };
        f.write_str(label)
    }
}
