mod adhoc;
mod connection_pool;
mod driver_operation_failed;
mod message;
mod type_conversion;
mod unsupported_type;

use adhoc::AdhocError;
use connection_pool::ConnectionPool;
use driver_operation_failed::DriverOperationFailed;
use message::Message;
use type_conversion::TypeConversionError;
use unsupported_type::UnsupportedType;

use std::{fmt, sync::Arc};

/// Return early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Build an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Quill.
///
/// Errors are one pointer wide and cheap to clone. Each carries a kind and
/// optionally the error it was raised in response to (see
/// [`context`](Error::context)). The `is_*` methods match any kind in that
/// chain.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<Node>>,
}

#[derive(Debug)]
struct Node {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ConnectionPool(ConnectionPool),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConnectionUrl(Message),
    InvalidDriverConfiguration(Message),
    InvalidResult(Message),
    InvalidStatement(Message),
    RecordNotFound(Message),
    TypeConversion(TypeConversionError),
    UnsupportedType(UnsupportedType),
    Unknown,
}

impl Error {
    /// Wraps this error in `consequent`.
    ///
    /// The result has the kind of `consequent`; this error becomes its cause.
    /// Display lists the newest context first and ends with the root cause.
    ///
    /// When `consequent` is still shared, its kind is copied. Kinds wrapping a
    /// foreign error (driver, pool, anyhow) cannot be copied and are carried
    /// as ad-hoc text, so their `is_*` predicate no longer matches.
    pub fn context(self, consequent: impl IntoError) -> Error {
        let consequent = consequent.into_error();

        let kind = match consequent.inner.map(Arc::try_unwrap) {
            Some(Ok(node)) => node.kind,
            Some(Err(node)) => node.kind.duplicate(),
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(Node {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn kind(&self) -> &ErrorKind {
        match &self.inner {
            Some(node) => &node.kind,
            None => &ErrorKind::Unknown,
        }
    }

    fn cause(&self) -> Option<&Error> {
        self.inner.as_ref()?.cause.as_ref()
    }

    /// Whether this error or any error in its cause chain satisfies `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        let mut next = Some(self);

        while let Some(err) = next {
            if f(err.kind()) {
                return true;
            }
            next = err.cause();
        }

        false
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::ConnectionPool(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self.cause().map(|cause| cause as _),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.kind(), f)?;

        match self.cause() {
            Some(cause) => write!(f, ": {cause}"),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", self.kind())
                .field("cause", &self.cause())
                .finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => fmt::Display::fmt(err, f),
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
            ErrorKind::ConnectionPool(err) => fmt::Display::fmt(err, f),
            ErrorKind::DriverOperationFailed(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidConnectionUrl(err)
            | ErrorKind::InvalidDriverConfiguration(err)
            | ErrorKind::InvalidResult(err)
            | ErrorKind::InvalidStatement(err)
            | ErrorKind::RecordNotFound(err) => fmt::Display::fmt(err, f),
            ErrorKind::TypeConversion(err) => fmt::Display::fmt(err, f),
            ErrorKind::UnsupportedType(err) => fmt::Display::fmt(err, f),
            ErrorKind::Unknown => f.write_str("unknown quill error"),
        }
    }
}

impl ErrorKind {
    fn duplicate(&self) -> ErrorKind {
        match self {
            ErrorKind::Adhoc(err) => ErrorKind::Adhoc(err.clone()),
            ErrorKind::InvalidConnectionUrl(err) => ErrorKind::InvalidConnectionUrl(err.clone()),
            ErrorKind::InvalidDriverConfiguration(err) => {
                ErrorKind::InvalidDriverConfiguration(err.clone())
            }
            ErrorKind::InvalidResult(err) => ErrorKind::InvalidResult(err.clone()),
            ErrorKind::InvalidStatement(err) => ErrorKind::InvalidStatement(err.clone()),
            ErrorKind::RecordNotFound(err) => ErrorKind::RecordNotFound(err.clone()),
            ErrorKind::TypeConversion(err) => ErrorKind::TypeConversion(err.clone()),
            ErrorKind::UnsupportedType(err) => ErrorKind::UnsupportedType(err.clone()),
            ErrorKind::Unknown => ErrorKind::Unknown,
            ErrorKind::Anyhow(_)
            | ErrorKind::ConnectionPool(_)
            | ErrorKind::DriverOperationFailed(_) => {
                ErrorKind::Adhoc(AdhocError::new(self.to_string()))
            }
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(Node { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        ErrorKind::Anyhow(err).into()
    }
}

/// Foreign errors that are only ever reported, never matched on.
macro_rules! bridge_via_anyhow {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Error {
                    anyhow::Error::from(err).into()
                }
            }
        )*
    };
}

bridge_via_anyhow!(std::io::Error, uuid::Error, jiff::Error);

/// Conversion into an [`Error`], accepted by [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}
