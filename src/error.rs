/// Errors raised while loading records or reading configuration.
///
/// Table operations themselves never fail: a missing key is `None`, not an
/// error.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading records
    Io(std::io::Error),

    /// Configuration could not be parsed
    Config(toml::de::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read records: {e}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self::Config(value)
    }
}

/// Loader result
pub type Result<T> = std::result::Result<T, Error>;
