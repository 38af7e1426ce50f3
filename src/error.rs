use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad class of a failure, used to tell the user what to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// missing or unreadable input, unknown baseline
    Configuration,
    /// a benchmark entry that does not follow the expected shape
    Format,
    /// a variant not aligned with the baseline
    Consistency,
    /// writing, rendering or opening the chart
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no baseline benchmark found, expected a variant named {baseline:?}")]
    MissingBaseline { baseline: String },

    #[error("malformed benchmark name {name:?}, expected <variant>[_solution]/<group>/<input_size>")]
    MalformedName { name: String },

    #[error("benchmark {name:?}: input size {size:?} is not a non-negative integer")]
    InvalidInputSize { name: String, size: String },

    #[error("benchmark {name:?}: real_time is missing or not a number")]
    InvalidTime { name: String },

    #[error("variant {variant:?} has {found} measurements, the baseline has {expected}")]
    LengthMismatch {
        variant: String,
        expected: usize,
        found: usize,
    },

    #[error("variant {variant:?} at position {position}: input size {found} does not match the baseline size {expected}")]
    SizeMismatch {
        variant: String,
        position: usize,
        expected: i64,
        found: i64,
    },

    #[error("reading benchmark results {path:?}: {error}")]
    Reading {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("parsing benchmark results {path:?}: {error}")]
    Parsing {
        error: serde_json::Error,
        path: PathBuf,
    },

    #[error("writing chart {path:?}: {error}")]
    Writing {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("rendering chart: {0}")]
    Rendering(String),

    #[error("opening chart {path:?} in the default viewer: {reason}")]
    Viewer { path: PathBuf, reason: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingBaseline { .. } | Error::Reading { .. } => ErrorKind::Configuration,
            Error::MalformedName { .. }
            | Error::InvalidInputSize { .. }
            | Error::InvalidTime { .. }
            | Error::Parsing { .. } => ErrorKind::Format,
            Error::LengthMismatch { .. } | Error::SizeMismatch { .. } => ErrorKind::Consistency,
            Error::Writing { .. }
            | Error::Rendering(_)
            | Error::Viewer { .. } => ErrorKind::Io,
        }
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(error: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Rendering(error.to_string())
    }
}
