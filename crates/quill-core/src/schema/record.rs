use super::ModelDef;
use crate::stmt::Value;

/// A type whose attributes can be mapped to table columns.
///
/// Implemented by `#[derive(Model)]`.
pub trait Record: 'static {
    /// The static descriptor table of this type.
    fn def() -> &'static ModelDef
    where
        Self: Sized;

    /// Reads the mapped attribute `name`. Returns `None` for names that are
    /// not mapped attributes of this type.
    fn get(&self, name: &str) -> Option<Value>;
}
