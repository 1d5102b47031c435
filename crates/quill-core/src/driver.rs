mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// A backing store that sessions talk to.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL this driver was configured with
    fn url(&self) -> Cow<'_, str>;

    /// Registry key of the SQL dialect spoken by the store
    fn dialect(&self) -> &'static str;

    /// Opens a connection to the store.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on open connections, when the store has one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// An open connection.
///
/// Statements on one connection execute one at a time, in call order.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;

    /// Release the connection.
    async fn close(self: Box<Self>) -> crate::Result<()> {
        Ok(())
    }
}
