use crate::{
    ast::{ExprCall, Operand, Operator, Token},
    lexer::{LexError, Lexer},
};

/// Errors produced while parsing an expression body into an [`ExprCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Body has fewer than two tokens, or a token cannot stand as an operand
    Malformed(String),
    /// Operator token is not in the closed set
    UnknownOperator(String),
    /// Operand count does not match the operator's arity
    Arity {
        op: &'static str,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Malformed(msg) => write!(f, "malformed expression: {}", msg),
            ParseError::UnknownOperator(op) => write!(f, "unknown operator: '{}'", op),
            ParseError::Arity { op, expected, found } => {
                write!(
                    f,
                    "operator '{}' requires {} operand{}, found {}",
                    op,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    found
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parser for the prefix form of an expression body.
///
/// Grammar: `operator operand+`, where the first token names the operator
/// and every remaining token is an operand. The operand count is checked
/// against the operator's fixed arity.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    fn collect_tokens(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.lexer.next_token()? {
                Token::Eof => return Ok(tokens),
                token => tokens.push(token),
            }
        }
    }

    /// Parse the whole body into an operator application.
    ///
    /// Lexing failures surface as [`ParseError::Malformed`]; they are body
    /// syntax errors from the caller's point of view.
    pub fn parse(&mut self) -> Result<ExprCall, ParseError> {
        let tokens = self
            .collect_tokens()
            .map_err(|e| ParseError::Malformed(e.to_string()))?;

        // An operator needs at least one operand.
        if tokens.len() < 2 {
            return Err(ParseError::Malformed(format!(
                "expected an operator and at least one operand, found {} token{}",
                tokens.len(),
                if tokens.len() == 1 { "" } else { "s" }
            )));
        }

        let mut tokens = tokens.into_iter();
        let op = match tokens.next() {
            Some(Token::Plus) => Operator::Add,
            Some(Token::Ident(name)) if name == "abs" => Operator::Abs,
            Some(Token::Ident(name)) => return Err(ParseError::UnknownOperator(name)),
            Some(Token::Integer(n)) => return Err(ParseError::UnknownOperator(n.to_string())),
            Some(Token::Float(n)) => return Err(ParseError::UnknownOperator(n.to_string())),
            Some(Token::Eof) | None => unreachable!("token count checked above"),
        };

        let operands = tokens
            .map(|token| match token {
                Token::Integer(n) => Ok(Operand::Integer(n)),
                Token::Float(n) => Ok(Operand::Float(n)),
                Token::Ident(name) => Ok(Operand::Name(name)),
                Token::Plus => Err(ParseError::Malformed(
                    "operator '+' cannot appear in operand position".to_string(),
                )),
                Token::Eof => unreachable!("Eof terminates collection"),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if operands.len() != op.arity() {
            return Err(ParseError::Arity {
                op: op.name(),
                expected: op.arity(),
                found: operands.len(),
            });
        }

        Ok(ExprCall { op, operands })
    }
}
