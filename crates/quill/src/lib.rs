//! Record mapping over SQL.
//!
//! Record types derive [`Model`]; a [`Session`] turns record verbs (insert,
//! find, update, delete, count and their where/order/limit modifiers) into
//! parameterized statements and maps result rows back into records. An
//! [`Engine`] owns the connection and hands out sessions.

pub mod engine;
pub use engine::{Builder, Engine};

mod hooks;
pub use hooks::Hooks;

mod model;
pub use model::Model;

pub mod session;
pub use session::Session;

pub mod stmt;
pub use stmt::{IntoAssignments, Params, Primitive};

pub use quill_core::{
    bail,
    dialect::{self, Dialect},
    driver::{self, Connection, Driver},
    err,
    schema::{self, Record, Schema},
    Error, Result,
};

pub use quill_macros::Model;

pub use async_trait::async_trait;

/// An owned, boxed future, as returned by transaction closures.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        model::{check_record_len, load_field},
        Hooks, Model, Primitive, Result,
    };
    pub use quill_core::{
        schema::{FieldDef, ModelDef, Record},
        stmt::{Value, ValueRecord},
    };
    pub use std::{default::Default, option::Option};
}
