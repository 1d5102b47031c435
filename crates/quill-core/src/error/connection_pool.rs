use super::{Error, ErrorKind};

use std::fmt;

/// A connection could not be checked out of the engine's pool.
#[derive(Debug)]
pub(super) struct ConnectionPool {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionPool {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl fmt::Display for ConnectionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection pool: {}", self.inner)
    }
}

impl Error {
    /// Wraps an error raised while managing pooled connections.
    pub fn connection_pool(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        ErrorKind::ConnectionPool(ConnectionPool {
            inner: Box::new(err),
        })
        .into()
    }

    pub fn is_connection_pool(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::ConnectionPool(_)))
    }
}
