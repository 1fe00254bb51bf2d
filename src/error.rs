use std::fmt;
use std::io;

#[derive(Debug)]
pub enum BreakoutError {
    /// Malformed or out-of-range command-line arguments
    Args(clap::Error),
    /// The terminal could not be set up, polled or drawn to
    Terminal(io::Error),
}

impl fmt::Display for BreakoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(err) => write!(f, "invalid arguments: {err}"),
            Self::Terminal(err) => write!(f, "terminal error: {err}"),
        }
    }
}

impl std::error::Error for BreakoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Args(err) => Some(err),
            Self::Terminal(err) => Some(err),
        }
    }
}

impl From<clap::Error> for BreakoutError {
    fn from(err: clap::Error) -> Self {
        Self::Args(err)
    }
}

impl From<io::Error> for BreakoutError {
    fn from(err: io::Error) -> Self {
        Self::Terminal(err)
    }
}
