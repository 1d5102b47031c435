use crate::stmt::Type;

/// A resolved column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Attribute name, also the column name
    pub name: String,

    /// Column type, as produced by the dialect or given explicitly
    pub ty: String,

    /// Verbatim annotation (e.g. `PRIMARY KEY`), empty when absent
    pub tag: String,

    /// Native kind of the attribute; drives result decoding
    pub native: Type,

    pub nullable: bool,
}

impl Field {
    /// Column definition used by `CREATE TABLE`: `name type [tag]`.
    pub fn column_def(&self) -> String {
        if self.tag.is_empty() {
            format!("{} {}", self.name, self.ty)
        } else {
            format!("{} {} {}", self.name, self.ty, self.tag)
        }
    }
}
