pub mod field_resolver;
pub use field_resolver::*;

pub mod formula_transformer;
pub use formula_transformer::*;

pub mod schema_validator;
pub use schema_validator::*;
