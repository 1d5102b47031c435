use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL statement to execute
    pub stmt: stmt::Statement,

    /// Expected kinds of the result columns.
    ///
    /// `None` runs the statement for its affected-row count. `Some` returns
    /// rows; an empty list, or a list shorter than the result, decodes the
    /// remaining columns by storage class.
    pub ret: Option<Vec<stmt::Type>>,
}

impl QuerySql {
    /// A statement run for its affected-row count.
    pub fn exec(stmt: stmt::Statement) -> Self {
        Self { stmt, ret: None }
    }

    /// A statement that returns rows.
    pub fn query(stmt: stmt::Statement, ret: Vec<stmt::Type>) -> Self {
        Self {
            stmt,
            ret: Some(ret),
        }
    }

    /// Kind expected for result column `index`.
    pub fn ret_ty(&self, index: usize) -> stmt::Type {
        self.ret
            .as_ref()
            .and_then(|ret| ret.get(index))
            .copied()
            .unwrap_or(stmt::Type::Unknown)
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
