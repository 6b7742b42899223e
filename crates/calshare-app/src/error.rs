use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while sharing or importing invite files
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File prefix {0:?} must be at least 3 characters")]
    PrefixTooShort(String),

    #[error("No unused file name left in {}", .0.display())]
    NamesExhausted(PathBuf),

    #[error("{} contains no calendar data", .0.display())]
    EmptyInput(PathBuf),

    #[error(transparent)]
    IcalError(#[from] calshare_ical::IcalError),

    #[error(transparent)]
    ParseError(#[from] calshare_ical::ParseError),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
