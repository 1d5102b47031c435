//! Clause composition.
//!
//! A statement is assembled from clauses. Each clause [`Kind`] has exactly one
//! generator that turns its [`Args`] into a SQL fragment and the values bound
//! to that fragment's placeholders. A [`Clause`] holds the pending arguments
//! for one statement and builds them, in a caller-chosen kind order, into a
//! single [`Statement`].

mod args;
pub use args::{Args, Assignments};

mod clause;
pub use clause::Clause;

pub mod generator;

mod kind;
pub use kind::Kind;

pub use quill_core::stmt::Statement;
