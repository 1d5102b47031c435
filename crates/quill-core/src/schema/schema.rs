use super::{Field, Record};
use crate::{stmt::ValueRecord, Dialect, Error, Result};

use indexmap::IndexMap;
use std::any::TypeId;

/// A record type resolved against a dialect.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Identifies the record type this schema was resolved from
    model: TypeId,

    /// Declared type name of the record
    pub name: String,

    /// Table name; equals `name`
    pub table_name: String,

    /// Mapped fields keyed by name, in declaration order
    fields: IndexMap<String, Field>,

    /// Field names in declaration order
    field_names: Vec<String>,
}

impl Schema {
    /// Resolves the record type `R`.
    ///
    /// Every mapped field without an explicit column type is passed through
    /// `dialect`. A kind the dialect cannot map fails the whole resolution.
    pub fn parse<R: Record>(dialect: &dyn Dialect) -> Result<Schema> {
        let def = R::def();
        let mut fields = IndexMap::with_capacity(def.fields.len());

        for field in def.fields {
            let ty = match field.column_type {
                Some(column_type) => column_type.to_string(),
                None => dialect
                    .data_type_of(&field.ty)
                    .ok_or_else(|| {
                        Error::unsupported_type(
                            dialect.name(),
                            &format!("{}.{}", def.name, field.name),
                            &field.ty,
                        )
                    })?
                    .into_owned(),
            };

            fields.insert(
                field.name.to_string(),
                Field {
                    name: field.name.to_string(),
                    ty,
                    tag: field.tag.to_string(),
                    native: field.ty,
                    nullable: field.nullable,
                },
            );
        }

        let field_names = fields.keys().cloned().collect();

        log::debug!(
            "resolved schema; model={}; dialect={}; fields={:?}",
            def.name,
            dialect.name(),
            field_names
        );

        Ok(Schema {
            model: TypeId::of::<R>(),
            name: def.name.to_string(),
            table_name: def.name.to_string(),
            fields,
            field_names,
        })
    }

    /// Returns `true` if this schema was resolved from the record type `R`.
    pub fn is<R: Record>(&self) -> bool {
        self.model == TypeId::of::<R>()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Reads one value per field from `record`, in field order.
    pub fn record_values<R: Record>(&self, record: &R) -> Result<ValueRecord> {
        self.field_names
            .iter()
            .map(|name| {
                record.get(name).ok_or_else(|| {
                    Error::invalid_statement(format!(
                        "`{}` has no mapped field `{name}`",
                        self.name
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(ValueRecord::from_vec)
    }
}
