use crate::{Error, Result};

use indexmap::IndexMap;
use quill_core::stmt::Value;
use quill_sql::Assignments;
use std::collections::{BTreeMap, HashMap};

/// Input accepted by `Session::update`.
///
/// The `SET` order follows the input's iteration order. `HashMap` has none,
/// so its entries are sorted by column name.
pub trait IntoAssignments {
    fn into_assignments(self) -> Result<Assignments>;
}

impl IntoAssignments for Assignments {
    fn into_assignments(self) -> Result<Assignments> {
        Ok(self)
    }
}

impl<K: Into<String>, V: Into<Value>> IntoAssignments for IndexMap<K, V> {
    fn into_assignments(self) -> Result<Assignments> {
        Ok(self.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> IntoAssignments for BTreeMap<K, V> {
    fn into_assignments(self) -> Result<Assignments> {
        Ok(self.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> IntoAssignments for HashMap<K, V> {
    fn into_assignments(self) -> Result<Assignments> {
        let mut entries = self
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Vec<(String, Value)>>();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> IntoAssignments for [(K, V); N] {
    fn into_assignments(self) -> Result<Assignments> {
        Ok(self.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> IntoAssignments for Vec<(K, V)> {
    fn into_assignments(self) -> Result<Assignments> {
        Ok(self.into_iter().collect())
    }
}

/// Flattened `key, value, key, value, ...` list.
impl IntoAssignments for Vec<Value> {
    fn into_assignments(self) -> Result<Assignments> {
        if self.len() % 2 != 0 {
            return Err(Error::invalid_statement(format!(
                "update expects key/value pairs, got {} values",
                self.len()
            )));
        }

        let mut assignments = Assignments::new();
        let mut values = self.into_iter();

        while let (Some(key), Some(value)) = (values.next(), values.next()) {
            let Value::String(key) = key else {
                return Err(Error::invalid_statement(format!(
                    "update key must be a string, got {:?}",
                    key.infer_ty()
                )));
            };
            assignments.insert(key, value);
        }

        Ok(assignments)
    }
}
