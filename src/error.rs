use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Ingestion errors
// ---------------------------------------------------------------------------

/// Why a single line could not be turned into a sample row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("'{token}' is not a finite number")]
    NotANumber { token: String },
}

/// Failure while reading timing files into a data set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line_no}: malformed row \"{line}\": {reason}", path.display())]
    Parse {
        path: PathBuf,
        line_no: usize,
        line: String,
        reason: RowError,
    },

    #[error("requested size N={0} does not occur in the input")]
    MissingSize(f64),
}

// ---------------------------------------------------------------------------
// Rendering errors
// ---------------------------------------------------------------------------

/// Failure while drawing or writing a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported output format for {} (use .png or .svg)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("chart font unavailable: {0}")]
    Font(String),

    #[error("encoding image failed")]
    Encode(#[from] image::ImageError),

    #[error("writing chart failed")]
    Io(#[from] std::io::Error),
}

/// Collapse a plotters drawing error (generic over its backend) into a
/// [`RenderError`].
pub fn draw_err<E>(err: plotters::drawing::DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Draw(err.to_string())
}
