pub mod compile_error;
pub use compile_error::*;

pub mod operator;
pub use operator::*;

pub mod function_registry;
pub use function_registry::*;

pub mod escape;
pub use escape::*;

pub mod formula_compiler;
pub use formula_compiler::*;
