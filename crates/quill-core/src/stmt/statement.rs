use super::Value;

use std::fmt;

/// A complete SQL statement: text with `?` placeholders and the values bound
/// to them, in placeholder order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// A statement without bound values.
    pub fn sql(sql: impl Into<String>) -> Self {
        Self::new(sql, vec![])
    }

    /// Number of `?` placeholders in the statement text.
    pub fn placeholders(&self) -> usize {
        self.sql.matches('?').count()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.sql, self.params)
    }
}

impl From<&str> for Statement {
    fn from(value: &str) -> Self {
        Self::sql(value)
    }
}

impl From<String> for Statement {
    fn from(value: String) -> Self {
        Self::sql(value)
    }
}
