mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::Diagnostics;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;
