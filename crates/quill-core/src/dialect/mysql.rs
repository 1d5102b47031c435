use super::Dialect;
use crate::stmt::{Statement, Type};

use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn data_type_of(&self, ty: &Type) -> Option<Cow<'static, str>> {
        let name = match ty {
            Type::Bool => "BOOLEAN",
            Type::I8 | Type::I16 | Type::I32 | Type::U8 | Type::U16 | Type::U32 => "INT",
            Type::I64 | Type::U64 => "BIGINT",
            Type::F32 | Type::F64 => "DOUBLE",
            Type::String => "VARCHAR(255)",
            Type::Bytes => "BLOB",
            Type::Timestamp => "DATETIME",
            Type::Uuid | Type::Unknown => return None,
        };
        Some(Cow::Borrowed(name))
    }

    fn table_exist_sql(&self, table: &str) -> Statement {
        Statement::new(
            "SELECT TABLE_NAME FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?",
            vec![table.into()],
        )
    }
}
