use super::Error;
use crate::stmt::Type;

/// Error when a field's native type has no column type in the active dialect.
///
/// This is a configuration defect: the record type cannot be mapped at all, so
/// resolution stops instead of leaving the field out.
#[derive(Debug, Clone)]
pub(super) struct UnsupportedType {
    dialect: Box<str>,
    field: Box<str>,
    ty: Type,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid sql type {:?} for field `{}` (dialect `{}`)",
            self.ty, self.field, self.dialect
        )
    }
}

impl Error {
    pub fn unsupported_type(dialect: &str, field: &str, ty: &Type) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            dialect: dialect.into(),
            field: field.into(),
            ty: *ty,
        }))
    }

    pub fn is_unsupported_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedType(_)))
    }
}
