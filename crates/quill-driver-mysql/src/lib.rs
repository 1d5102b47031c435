mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Pool,
};
use quill_core::{
    async_trait,
    driver::{
        operation::{QuerySql, Transaction},
        Driver, Operation, Response,
    },
    stmt::{self, ValueRecord},
    Error, Result,
};
use std::borrow::Cow;
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    url: String,
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url_str}"
            )));
        }

        url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!("missing host in connection URL; url={url_str}"))
        })?;

        if url.path().is_empty() || url.path() == "/" {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url_str}"
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;
        let opts = mysql_async::OptsBuilder::from_opts(opts).client_found_rows(true);
        let pool = Pool::new(opts);

        Ok(Self {
            url: url_str,
            pool,
        })
    }
}

#[async_trait]
impl Driver for MySQL {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    fn dialect(&self) -> &'static str {
        "mysql"
    }

    async fn connect(&self) -> Result<Box<dyn quill_core::driver::Connection>> {
        let conn = self
            .pool
            .get_conn()
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    async fn transaction(&mut self, op: Transaction) -> Result<Response> {
        let sql = match op {
            Transaction::Start => "START TRANSACTION",
            op => op.as_sql(),
        };

        self.conn
            .query_drop(sql)
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(Response::count(0))
    }

    async fn query_sql(&mut self, op: QuerySql) -> Result<Response> {
        let args = op
            .stmt
            .params
            .iter()
            .cloned()
            .map(|param| Value::from(param).to_value())
            .collect::<Vec<_>>();

        let statement = self
            .conn
            .prep(&op.stmt.sql)
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut result = self
            .conn
            .exec_iter(&statement, mysql_async::Params::Positional(args))
            .await
            .map_err(Error::driver_operation_failed)?;

        if op.ret.is_none() {
            let count = result.affected_rows();
            result
                .drop_result()
                .await
                .map_err(Error::driver_operation_failed)?;
            return Ok(Response::count(count));
        }

        let columns = result
            .columns()
            .map(|columns| {
                columns
                    .iter()
                    .map(|column| column.name_str().into_owned())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let rows: Vec<mysql_async::Row> = result
            .collect()
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        for row in rows {
            let record = row
                .unwrap_raw()
                .into_iter()
                .enumerate()
                .map(|(index, value)| {
                    let value = value.unwrap_or(mysql_async::Value::NULL);
                    Value::from_sql(value, op.ret_ty(index)).map(Value::into_inner)
                })
                .collect::<Result<Vec<_>>>()
                .map(ValueRecord::from_vec);

            let failed = record.is_err();
            ret.push(record);

            if failed {
                break;
            }
        }

        Ok(Response::value_stream(
            stmt::ValueStream::from_results(ret).with_columns(columns),
        ))
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl quill_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::QuerySql(op) => self.query_sql(op).await,
            Operation::Transaction(op) => self.transaction(op).await,
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(Error::driver_operation_failed)
    }
}
