//! SQL dialects.
//!
//! A dialect maps native attribute kinds to column types and knows how to ask
//! its store whether a table exists. Dialects live in a process-wide registry
//! keyed by name; `mysql` and `sqlite` are always registered.

mod mysql;
pub use mysql::MySql;

mod sqlite;
pub use sqlite::Sqlite;

use crate::stmt::{Statement, Type};

use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, LazyLock, RwLock},
};

pub trait Dialect: std::fmt::Debug + Send + Sync + 'static {
    /// Registry key of this dialect
    fn name(&self) -> &'static str;

    /// Column type for a native kind, or `None` if the kind has no mapping.
    fn data_type_of(&self, ty: &Type) -> Option<Cow<'static, str>>;

    /// Parameterized statement returning at least one row iff `table` exists.
    fn table_exist_sql(&self, table: &str) -> Statement;
}

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<dyn Dialect>>>> = LazyLock::new(|| {
    let mut dialects: HashMap<String, Arc<dyn Dialect>> = HashMap::new();
    dialects.insert(MySql.name().to_string(), Arc::new(MySql));
    dialects.insert(Sqlite.name().to_string(), Arc::new(Sqlite));
    RwLock::new(dialects)
});

/// Registers `dialect` under `name`, replacing any previous entry.
pub fn register(name: impl Into<String>, dialect: impl Dialect) {
    let name = name.into();
    log::debug!("register dialect; name={name}");

    REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(name, Arc::new(dialect));
}

/// Looks up a registered dialect.
pub fn get(name: &str) -> Option<Arc<dyn Dialect>> {
    REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}
