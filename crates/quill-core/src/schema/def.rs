use crate::stmt::Type;

/// Static description of a record type, emitted once per type by the derive.
#[derive(Debug)]
pub struct ModelDef {
    /// Declared type name. Used verbatim as the table name.
    pub name: &'static str,

    /// Mapped fields in declaration order. Skipped fields are not listed.
    pub fields: &'static [FieldDef],
}

/// Static description of one mapped attribute.
#[derive(Debug)]
pub struct FieldDef {
    /// Attribute name, also the column name
    pub name: &'static str,

    /// Native kind of the attribute
    pub ty: Type,

    /// True when the attribute is an `Option<T>`
    pub nullable: bool,

    /// Annotation string from `#[tag("...")]`, empty when absent
    pub tag: &'static str,

    /// Column type from `#[column(type = "...")]`; bypasses the type mapper
    pub column_type: Option<&'static str>,
}

impl ModelDef {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}
