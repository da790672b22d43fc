pub mod ast;
pub mod constants;
pub mod convert;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{ExprCall, Operand, Operator, Token};
pub use constants::{ConstantTable, GLOBAL_PREFIX};
pub use convert::{ConvertError, convert};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use render::{MAX_DEPTH, RenderError, Renderer};
pub use value::Value;
