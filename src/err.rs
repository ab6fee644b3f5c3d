use std::fmt::{self, Debug, Display};
use std::io;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to turn a `net:host:port` token into an address.
#[derive(Debug, Error)]
pub enum AddrError {
    #[error(r#"invalid address format, must be "net:host:port": {0}"#)]
    Format(String),
    #[error("unknown network {0}")]
    UnknownNetwork(String),
    #[error(transparent)]
    Resolve(#[from] io::Error),
}

/// A compiled-in default that does not resolve. Only ever raised as a panic.
#[derive(Debug, Error)]
#[error("invalid default value for flag -{name}: {source}")]
pub struct DefaultError {
    pub name: String,
    pub source: AddrError,
}

impl DefaultError {
    pub fn raise(name: &str, source: AddrError) -> ! {
        panic!(
            "{}",
            DefaultError {
                name: name.to_owned(),
                source,
            }
        )
    }
}

pub struct DisplayError(BoxError);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<BoxError>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}
