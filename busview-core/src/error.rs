/// The Error type for the busview-core crate.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A method argument carries a direction other than `in` or `out`.
    InvalidDirection(String),
    /// The introspection document could not be deserialized.
    #[cfg(feature = "xml")]
    Xml(quick_xml::DeError),
    /// An I/O error.
    Io(std::io::Error),
    /// The introspection provider failed to perform a remote call.
    Provider(Box<dyn core::error::Error + Send + Sync + 'static>),
}

/// The Result type for the busview-core crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Wrap an error reported by an [`crate::Introspectable`] implementation.
    pub fn provider<E>(e: E) -> Self
    where
        E: Into<Box<dyn core::error::Error + Send + Sync + 'static>>,
    {
        Error::Provider(e.into())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "xml")]
            Error::Xml(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Provider(e) => Some(&**e),
            Error::InvalidDirection(_) => None,
        }
    }
}

#[cfg(feature = "xml")]
impl From<quick_xml::DeError> for Error {
    fn from(e: quick_xml::DeError) -> Self {
        Error::Xml(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidDirection(d) => write!(f, "unknown arg direction: {d:?}"),
            #[cfg(feature = "xml")]
            Error::Xml(e) => write!(f, "Malformed introspection document: {e}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Provider(e) => write!(f, "{e}"),
        }
    }
}
