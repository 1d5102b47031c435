use crate::{Hooks, Primitive, Result};

use quill_core::{
    err,
    schema::Record,
    stmt::{Value, ValueRecord},
    Error,
};

/// A record type mapped to a table.
///
/// Derive it with `#[derive(Model)]`:
///
/// ```ignore
/// #[derive(Debug, quill::Model)]
/// struct User {
///     #[tag("PRIMARY KEY")]
///     name: String,
///     age: i32,
/// }
/// ```
///
/// The table is named after the struct and has one column per field, in
/// declaration order. `#[skip]` leaves a field unmapped; `#[column(type =
/// "...")]` sets the column type instead of asking the dialect.
pub trait Model: Record + Hooks + Sized + Send + Sync + 'static {
    /// Binds a row to a new record. Values are positional in field order.
    fn load(record: ValueRecord) -> Result<Self>;
}

#[doc(hidden)]
pub fn check_record_len(record: &ValueRecord, expected: usize, model: &str) -> Result<()> {
    if record.len() == expected {
        Ok(())
    } else {
        Err(Error::invalid_result(format!(
            "`{model}` expects {expected} columns, row has {}",
            record.len()
        )))
    }
}

#[doc(hidden)]
pub fn load_field<T: Primitive>(value: Value, model: &str, field: &str) -> Result<T> {
    T::load(value).map_err(|e| e.context(err!("failed to load `{model}.{field}`")))
}
