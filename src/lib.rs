//! Type-checked, injection-safe and rename-robust filter formulas for Airtable.
//!
//! Formulas are built as trees ([`Formula`]) whose field references may name a
//! column by application alias, display name or field id. [`formula`] resolves
//! every reference against a [`TableDefinition`] and compiles the tree into the
//! text expected by the API (e.g. for `filterByFormula`), escaping all literal
//! values on the way.

pub mod config;
pub use config::*;

pub mod schema;
pub use schema::{AliasTarget, Column, TableDefinition};

pub mod formula;
pub use formula::{FieldReference, Formula, FormulaError, Literal};

pub mod resolver;
pub use resolver::{FieldResolver, FormulaTransformer, SchemaValidator};

pub mod compiler;
pub use compiler::{CompileError, FormulaBackend, FormulaCompiler};

pub mod api;
pub use api::*;
