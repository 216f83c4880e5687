use config::ConfigError;
use std::{fmt, io, result};

use failure::{Error, Fail};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum ErrorKind {

    #[fail(display = "ParseError")]
    Parse(#[cause] ParseError),
    #[fail(display = "IoError: cannot write {}", path)]
    Io {
        path: String,
        #[cause] cause: io::Error,
    },
    #[fail(display = "ImageError")]
    ImageError(#[cause] image::ImageError),
    #[fail(display = "ConfigError")]
    ConfigError(#[cause] ConfigError),
    #[fail(display = "Invalid value for `{}`: {}", key, reason)]
    InvalidSetting {
        key: &'static str,
        reason: String,
    },
    #[fail(display = "A {} matrix does not fit into an image", dims)]
    Render {
        dims: Dims,
    },
}

/// Reasons a matrix file could not be loaded.
#[derive(Debug, Fail)]
pub enum ParseError {

    #[fail(display = "cannot read {}", path)]
    Unreadable {
        path: String,
        #[cause] cause: io::Error,
    },
    #[fail(display = "{}:{}: `{}` is not a number", path, line, token)]
    InvalidNumber {
        path: String,
        line: usize,
        token: String,
    },
    #[fail(display = "{}:{}: expected {} columns, found {}", path, line, expected, found)]
    RaggedRow {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[fail(display = "{} contains no data", path)]
    Empty {
        path: String,
    },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Matrix dimensions as rows x columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims(pub usize, pub usize);

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}
