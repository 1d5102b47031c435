use crate::logging_driver::DriverOp;
use quill_core::{
    driver::{operation::Transaction, Operation},
    stmt::Statement,
};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&mut self) -> Option<Operation> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0).operation)
        }
    }

    /// Remove the first operation, which must be a SQL statement, and return
    /// the statement.
    #[track_caller]
    pub fn pop_statement(&mut self) -> Statement {
        match self.pop() {
            Some(Operation::QuerySql(op)) => op.stmt,
            actual => panic!("expected a SQL statement; actual={actual:?}"),
        }
    }

    /// Remove the first operation, which must be a transaction control
    /// operation, and return it.
    #[track_caller]
    pub fn pop_transaction(&mut self) -> Transaction {
        match self.pop() {
            Some(Operation::Transaction(op)) => op,
            actual => panic!("expected a transaction operation; actual={actual:?}"),
        }
    }

    /// SQL text of every logged statement, in execution order
    pub fn sql(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match &op.operation {
                Operation::QuerySql(op) => Some(op.stmt.sql.clone()),
                Operation::Transaction(_) => None,
            })
            .collect()
    }

    /// Number of operations the store rejected
    pub fn failures(&self) -> usize {
        self.ops.lock().unwrap().iter().filter(|op| !op.ok).count()
    }
}
