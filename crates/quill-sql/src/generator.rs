//! One pure generator per clause kind.
//!
//! Each generator returns the clause's SQL fragment and the values bound to
//! its placeholders, in placeholder order.

mod delim;
use delim::{placeholders, Comma};

use crate::{Assignments, Statement};

use quill_core::stmt::{Value, ValueRecord};

pub fn insert(table: &str, fields: &[String]) -> Statement {
    Statement::sql(format!("INSERT INTO {table} ({})", Comma(fields)))
}

/// One placeholder group per row, sized to that row.
pub fn values(rows: &[ValueRecord]) -> Statement {
    let groups = rows
        .iter()
        .map(|row| format!("({})", placeholders(row.len())))
        .collect::<Vec<_>>();

    let params = rows.iter().flat_map(|row| row.iter().cloned()).collect();

    Statement::new(format!("VALUES {}", Comma(&groups)), params)
}

pub fn select(table: &str, fields: &[String]) -> Statement {
    Statement::sql(format!("SELECT {} FROM {table}", Comma(fields)))
}

pub fn limit(limit: u64) -> Statement {
    Statement::new("LIMIT ?", vec![Value::U64(limit)])
}

/// The predicate is passed through verbatim.
pub fn filter(predicate: &str, values: &[Value]) -> Statement {
    Statement::new(format!("WHERE {predicate}"), values.to_vec())
}

pub fn order_by(expr: &str) -> Statement {
    Statement::sql(format!("ORDER BY {expr}"))
}

pub fn update(table: &str, assignments: &Assignments) -> Statement {
    let set = assignments
        .iter()
        .map(|(column, _)| format!("{column} = ?"))
        .collect::<Vec<_>>();

    let params = assignments.iter().map(|(_, value)| value.clone()).collect();

    Statement::new(format!("UPDATE {table} SET {}", Comma(&set)), params)
}

pub fn delete(table: &str) -> Statement {
    Statement::sql(format!("DELETE FROM {table}"))
}

pub fn count(table: &str) -> Statement {
    select(table, &["count(*)".to_string()])
}
