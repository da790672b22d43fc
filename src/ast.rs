//! Tokens and the parsed form of an embedded `@[...]` expression.

/// Tokens produced by the expression lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Addition operator (`+`)
    Plus,

    /// Constant name or word operator
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// abs
    /// max_retries
    /// _internal
    /// ```
    Ident(String),

    /// Integer literal, optionally signed
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -50
    /// ```
    Integer(i64),

    /// Floating-point literal, optionally signed
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// -0.5
    /// ```
    Float(f64),

    /// End of input
    Eof,
}

/// The closed operator set. Adding an operator is a code change here and in
/// the evaluator's dispatch; there is no user extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Binary addition (`+`)
    Add,
    /// Unary absolute value (`abs`)
    Abs,
}

impl Operator {
    /// Number of operands the operator requires.
    pub fn arity(self) -> usize {
        match self {
            Operator::Add => 2,
            Operator::Abs => 1,
        }
    }

    /// The operator's spelling in expression syntax.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Abs => "abs",
        }
    }
}

/// A single operand in prefix position: a literal number or a constant name
/// to be resolved against the constant table.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Float(f64),
    Name(String),
}

/// A parsed expression: one operator applied to its operands, in order.
///
/// The parser guarantees `operands.len() == op.arity()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub op: Operator,
    pub operands: Vec<Operand>,
}
