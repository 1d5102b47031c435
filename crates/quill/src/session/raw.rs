use super::Session;
use crate::{Params, Result};

use quill_core::{
    stmt::{Statement, ValueRecord, ValueStream},
    Error,
};
use std::mem;

impl Session {
    /// Appends a raw SQL fragment and the values bound to its placeholders.
    ///
    /// Fragments accumulate, separated by a single space, until the next
    /// [`exec`](Self::exec), [`query_rows`](Self::query_rows) or
    /// [`query_row`](Self::query_row).
    pub fn raw(&mut self, sql: impl AsRef<str>, params: impl Params) -> &mut Self {
        if !self.raw.sql.is_empty() {
            self.raw.sql.push(' ');
        }
        self.raw.sql.push_str(sql.as_ref());
        self.raw.params.extend(params.into_params());
        self
    }

    /// Runs the raw statement and returns the number of rows affected.
    pub async fn exec(&mut self) -> Result<u64> {
        let stmt = self.take_raw()?;
        self.exec_count(stmt).await
    }

    /// Runs the raw statement and returns its rows, decoded by storage class.
    pub async fn query_rows(&mut self) -> Result<ValueStream> {
        let stmt = self.take_raw()?;
        self.exec_query(stmt, vec![]).await
    }

    /// Runs the raw statement and returns its first row, if any.
    pub async fn query_row(&mut self) -> Result<Option<ValueRecord>> {
        let mut rows = self.query_rows().await?;
        rows.next().await.transpose()
    }

    fn take_raw(&mut self) -> Result<Statement> {
        let stmt = mem::take(&mut self.raw);
        self.reset();

        if stmt.sql.trim().is_empty() {
            return Err(Error::invalid_statement("no raw statement to execute"));
        }

        Ok(stmt)
    }
}
