mod assignments;
pub use assignments::IntoAssignments;

mod params;
pub use params::Params;

mod primitive;
pub use primitive::Primitive;

pub use quill_core::stmt::{Statement, Type, Value, ValueRecord, ValueStream};
pub use quill_sql::Assignments;
