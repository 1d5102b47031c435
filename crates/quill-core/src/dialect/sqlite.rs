use super::Dialect;
use crate::stmt::{Statement, Type};

use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn data_type_of(&self, ty: &Type) -> Option<Cow<'static, str>> {
        let name = match ty {
            Type::Bool => "bool",
            ty if ty.is_integer() => "integer",
            Type::F32 | Type::F64 => "real",
            Type::String | Type::Uuid => "text",
            Type::Bytes => "blob",
            Type::Timestamp => "datetime",
            _ => return None,
        };
        Some(Cow::Borrowed(name))
    }

    fn table_exist_sql(&self, table: &str) -> Statement {
        Statement::new(
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            vec![table.into()],
        )
    }
}
