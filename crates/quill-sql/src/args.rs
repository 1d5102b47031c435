use crate::{generator, Kind, Statement};

use indexmap::IndexMap;
use quill_core::stmt::{Value, ValueRecord};

/// Arguments of one clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// `INSERT INTO <table> (<fields>)`
    Insert { table: String, fields: Vec<String> },

    /// `VALUES (...), (...)`, one entry per row
    Values(Vec<ValueRecord>),

    /// `SELECT <fields> FROM <table>`
    Select { table: String, fields: Vec<String> },

    /// `LIMIT ?`
    Limit(u64),

    /// `WHERE <predicate>`, with the values bound to the predicate
    Where {
        predicate: String,
        values: Vec<Value>,
    },

    /// `ORDER BY <expr>`
    OrderBy(String),

    /// `UPDATE <table> SET <k> = ?, ...`
    Update {
        table: String,
        assignments: Assignments,
    },

    /// `DELETE FROM <table>`
    Delete { table: String },

    /// `SELECT count(*) FROM <table>`
    Count { table: String },
}

/// Ordered `column -> value` assignments of an `UPDATE`.
///
/// The `SET` list and its bound values follow iteration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments(pub IndexMap<String, Value>);

impl Args {
    pub fn kind(&self) -> Kind {
        match self {
            Args::Insert { .. } => Kind::Insert,
            Args::Values(_) => Kind::Values,
            Args::Select { .. } => Kind::Select,
            Args::Limit(_) => Kind::Limit,
            Args::Where { .. } => Kind::Where,
            Args::OrderBy(_) => Kind::OrderBy,
            Args::Update { .. } => Kind::Update,
            Args::Delete { .. } => Kind::Delete,
            Args::Count { .. } => Kind::Count,
        }
    }

    /// Runs the generator registered for this clause's kind.
    pub fn generate(&self) -> Statement {
        match self {
            Args::Insert { table, fields } => generator::insert(table, fields),
            Args::Values(rows) => generator::values(rows),
            Args::Select { table, fields } => generator::select(table, fields),
            Args::Limit(limit) => generator::limit(*limit),
            Args::Where { predicate, values } => generator::filter(predicate, values),
            Args::OrderBy(expr) => generator::order_by(expr),
            Args::Update { table, assignments } => generator::update(table, assignments),
            Args::Delete { table } => generator::delete(table),
            Args::Count { table } => generator::count(table),
        }
    }
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(column.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<IndexMap<String, Value>> for Assignments {
    fn from(value: IndexMap<String, Value>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Assignments {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
