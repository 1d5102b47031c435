mod value;
pub(crate) use value::Value;

use quill_core::{
    async_trait,
    driver::{
        operation::{Operation, QuerySql, Transaction},
        Driver, Response,
    },
    stmt, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            quill_core::Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(quill_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn dialect(&self) -> &'static str {
        "sqlite"
    }

    async fn connect(&self) -> Result<Box<dyn quill_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    /// Every in-memory connection opens its own database.
    fn max_connections(&self) -> Option<usize> {
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Each in-memory connection is its own database.
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory()
            .map_err(quill_core::Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(quill_core::Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    fn transaction(&mut self, op: Transaction) -> Result<Response> {
        self.connection
            .execute_batch(op.as_sql())
            .map_err(quill_core::Error::driver_operation_failed)?;
        Ok(Response::count(0))
    }

    fn query_sql(&mut self, op: QuerySql) -> Result<Response> {
        let params = op
            .stmt
            .params
            .iter()
            .cloned()
            .map(Value::from)
            .collect::<Vec<_>>();

        if op.ret.is_none() {
            let mut stmt = self
                .connection
                .prepare_cached(&op.stmt.sql)
                .map_err(quill_core::Error::driver_operation_failed)?;

            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(quill_core::Error::driver_operation_failed)?;

            return Ok(Response::count(count as _));
        }

        // Not cached: a cached statement keeps reporting the columns it was
        // compiled with after its table is altered.
        let mut stmt = self
            .connection
            .prepare(&op.stmt.sql)
            .map_err(quill_core::Error::driver_operation_failed)?;

        let columns = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let width = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(quill_core::Error::driver_operation_failed)?;

        let mut ret = vec![];

        // A failing row ends the result; rows before it are kept.
        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let record = (0..width)
                        .map(|index| {
                            Value::from_sql(row, index, op.ret_ty(index)).map(Value::into_inner)
                        })
                        .collect::<Result<Vec<_>>>()
                        .map(stmt::ValueRecord::from_vec);

                    let failed = record.is_err();
                    ret.push(record);

                    if failed {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    ret.push(Err(quill_core::Error::driver_operation_failed(err)));
                    break;
                }
            }
        }

        Ok(Response::value_stream(
            stmt::ValueStream::from_results(ret).with_columns(columns),
        ))
    }
}

#[async_trait]
impl quill_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.query_sql(op),
            Operation::Transaction(op) => self.transaction(op),
        }
    }
}
