use std::{io, result};

use failure::{Error, Fail};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum ErrorKind {

    #[fail(display = "IoError")]
    IoError(#[cause] io::Error),
    #[fail(display = "IoError: cannot write {}", path)]
    Io {
        path: String,
        #[cause] cause: io::Error,
    },
    #[fail(display = "Invalid parameter `{}`: {}", name, reason)]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}
