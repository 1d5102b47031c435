//! Mapping between record types and tables.
//!
//! A record type describes itself with a static [`ModelDef`] table, generated
//! by `#[derive(Model)]`. Resolving that table against a [`Dialect`] yields a
//! [`Schema`]: the table name, the ordered mapped fields with their column
//! types, and lookup by field name.
//!
//! [`Dialect`]: crate::Dialect

mod def;
pub use def::{FieldDef, ModelDef};

mod field;
pub use field::Field;

mod record;
pub use record::Record;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;
