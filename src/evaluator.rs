use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};

use crate::{
    ast::{Operand, Operator},
    constants::ConstantTable,
    lexer::Lexer,
    parser::{ParseError, Parser},
    value::Value,
};

/// Marker pattern for embedded expressions. Anchored at both ends: the
/// whole scalar must be `@[` body `]`, with nothing before or after.
fn expr_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^@\[(.*)\]$").expect("marker pattern is valid"))
}

/// Errors that can occur while evaluating an embedded expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The expression body did not parse
    Parse(ParseError),

    /// Operand names a constant that is not in the table
    UnresolvedName(String),

    /// Operand names a constant whose value is not numeric
    NonNumericConstant { name: String, kind: &'static str },

    /// Integer arithmetic overflowed the result type
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::Parse(e) => write!(f, "{}", e),
            EvalError::UnresolvedName(name) => {
                write!(f, "cannot evaluate expression: '{}' is not a defined constant", name)
            }
            EvalError::NonNumericConstant { name, kind } => {
                write!(
                    f,
                    "cannot evaluate expression: constant '{}' is a {}, not a number",
                    name, kind
                )
            }
            EvalError::Overflow => {
                write!(f, "cannot evaluate expression: integer addition overflows")
            }
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        EvalError::Parse(e)
    }
}

/// Evaluates embedded `@[...]` expressions against a constant table.
///
/// The evaluator is a pure function of its inputs: it never mutates the
/// table, and resolving the same string twice yields the same result.
///
/// # Examples
///
/// ```
/// use cumin_lang::{ConstantTable, Evaluator, Value};
///
/// let pairs = vec![
///     ("global x".to_string(), Value::Integer(10)),
///     ("global y".to_string(), Value::Integer(5)),
/// ];
/// let table = ConstantTable::build(&pairs);
/// let evaluator = Evaluator::new(&table);
///
/// // Expressions compute
/// assert_eq!(evaluator.resolve("@[+ x y]").unwrap(), Some(Value::Integer(15)));
///
/// // Ordinary strings pass through
/// assert_eq!(evaluator.resolve("hello").unwrap(), None);
/// ```
pub struct Evaluator<'a> {
    constants: &'a ConstantTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(constants: &'a ConstantTable) -> Self {
        Evaluator { constants }
    }

    /// Resolve a candidate scalar string.
    ///
    /// Returns `Ok(None)` if the string does not carry the expression
    /// marker (the caller renders it as an ordinary string), `Ok(Some(v))`
    /// with the computed value if it does, and an error if the marker is
    /// present but the body cannot be parsed or evaluated.
    pub fn resolve(&self, raw: &str) -> Result<Option<Value>, EvalError> {
        let Some(caps) = expr_marker().captures(raw) else {
            return Ok(None);
        };
        let body = caps[1].trim();

        let call = Parser::new(Lexer::new(body)).parse()?;

        let args: Vec<Value> = call
            .operands
            .iter()
            .map(|operand| self.resolve_operand(operand))
            .collect::<Result<_, _>>()?;

        apply(call.op, &args).map(Some)
    }

    /// Token-level substitution: each operand is resolved on its own, so a
    /// constant name that happens to be a substring of another name or of a
    /// literal can never corrupt the expression.
    fn resolve_operand(&self, operand: &Operand) -> Result<Value, EvalError> {
        match operand {
            Operand::Integer(n) => Ok(Value::Integer(*n)),
            Operand::Float(n) => Ok(Value::Float(*n)),
            Operand::Name(name) => match self.constants.get(name) {
                Some(v @ (Value::Integer(_) | Value::Float(_))) => Ok(v.clone()),
                Some(other) => Err(EvalError::NonNumericConstant {
                    name: name.clone(),
                    kind: other.kind(),
                }),
                None => Err(EvalError::UnresolvedName(name.clone())),
            },
        }
    }
}

/// Apply an operator to resolved numeric operands.
///
/// Mixed integer/float addition goes through `Decimal` so that results
/// without a fractional part come back as integers instead of picking up
/// floating-point noise.
fn apply(op: Operator, args: &[Value]) -> Result<Value, EvalError> {
    match op {
        Operator::Add => match (&args[0], &args[1]) {
            (Value::Integer(a), Value::Integer(b)) => {
                a.checked_add(*b).map(Value::Integer).ok_or(EvalError::Overflow)
            }
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (Value::Integer(a), Value::Float(b)) => {
                if let Some(ad) = Decimal::from_i64(*a)
                    && let Some(bd) = Decimal::from_f64(*b)
                {
                    return Ok(decimal_to_value(ad + bd, *a as f64 + b));
                }
                Ok(Value::Float(*a as f64 + b))
            }
            (Value::Float(a), Value::Integer(b)) => {
                if let Some(ad) = Decimal::from_f64(*a)
                    && let Some(bd) = Decimal::from_i64(*b)
                {
                    return Ok(decimal_to_value(ad + bd, a + *b as f64));
                }
                Ok(Value::Float(a + *b as f64))
            }
            _ => unreachable!("operands resolve to numbers"),
        },
        Operator::Abs => match &args[0] {
            Value::Integer(n) => Ok(Value::Integer(n.saturating_abs())),
            Value::Float(n) => Ok(Value::Float(n.abs())),
            _ => unreachable!("operands resolve to numbers"),
        },
    }
}

fn decimal_to_value(d: Decimal, fallback: f64) -> Value {
    if d.is_integer()
        && let Some(n) = d.to_i64()
    {
        return Value::Integer(n);
    }
    d.to_f64().map(Value::Float).unwrap_or(Value::Float(fallback))
}
