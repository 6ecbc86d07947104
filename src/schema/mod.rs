pub mod column;
pub use column::*;

pub mod alias_target;
pub use alias_target::*;

pub mod table_definition;
pub use table_definition::*;
