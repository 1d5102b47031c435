use crate::{stmt::ValueStream, Error, Result};

/// What a connection hands back for one operation.
#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Affected-row count of a mutating statement
    Count(u64),

    /// Result rows of a query
    Values(ValueStream),
}

impl Response {
    pub fn count(count: u64) -> Response {
        Response {
            rows: Rows::Count(count),
        }
    }

    pub fn value_stream(values: impl Into<ValueStream>) -> Response {
        Response {
            rows: Rows::Values(values.into()),
        }
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        let Rows::Count(count) = self else {
            return Err(Error::invalid_result("expected affected-row count, got rows"));
        };
        Ok(count)
    }

    pub fn into_values(self) -> Result<ValueStream> {
        let Rows::Values(values) = self else {
            return Err(Error::invalid_result("expected rows, got affected-row count"));
        };
        Ok(values)
    }
}
