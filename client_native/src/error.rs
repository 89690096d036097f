use std::fmt::{self, Display};

/// Frontend failures. Each variant states where things went wrong.
#[derive(Debug)]
pub enum Error {
    WindowInit(String),
    WindowUpdate(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "window update error: {s}"),
        }
    }
}
