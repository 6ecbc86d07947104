pub mod literal;
pub use literal::*;

pub mod field_reference;
pub use field_reference::*;

pub mod formula_tree;
pub use formula_tree::*;

pub mod formula_json;

pub mod formula_error;
pub use formula_error::*;
