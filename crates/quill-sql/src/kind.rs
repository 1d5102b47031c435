use std::fmt;

/// Kind of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Insert,
    Values,
    Select,
    Limit,
    Where,
    OrderBy,
    Update,
    Delete,
    Count,
}

impl Kind {
    pub const ALL: [Kind; 9] = [
        Kind::Insert,
        Kind::Values,
        Kind::Select,
        Kind::Limit,
        Kind::Where,
        Kind::OrderBy,
        Kind::Update,
        Kind::Delete,
        Kind::Count,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Insert => "INSERT",
            Kind::Values => "VALUES",
            Kind::Select => "SELECT",
            Kind::Limit => "LIMIT",
            Kind::Where => "WHERE",
            Kind::OrderBy => "ORDERBY",
            Kind::Update => "UPDATE",
            Kind::Delete => "DELETE",
            Kind::Count => "COUNT",
        })
    }
}
