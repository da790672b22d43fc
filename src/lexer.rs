use crate::ast::Token;

/// Errors produced while tokenizing an expression body.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character outside the expression alphabet
    UnexpectedChar { ch: char, position: usize },
    /// Numeric literal that does not fit the target type
    InvalidNumber { text: String, position: usize },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character '{}' at offset {}", ch, position)
            }
            LexError::InvalidNumber { text, position } => {
                write!(f, "invalid number '{}' at offset {}", text, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenizer for the body of an `@[...]` expression.
///
/// The expression language is tiny: `+`, identifiers, and numeric literals,
/// separated by whitespace.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut number = String::new();
        let mut is_float = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !is_float {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if is_float {
            number
                .parse::<f64>()
                .map(Token::Float)
                .map_err(|_| LexError::InvalidNumber {
                    text: number.clone(),
                    position: start,
                })
        } else {
            number
                .parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| LexError::InvalidNumber {
                    text: number.clone(),
                    position: start,
                })
        }
    }

    /// Produce the next token, or `Token::Eof` at end of input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(Token::Eof);
        };

        match ch {
            '+' => {
                self.advance();
                Ok(Token::Plus)
            }
            '-' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_alphabetic() || c == '_' => Ok(Token::Ident(self.read_identifier())),
            _ => Err(LexError::UnexpectedChar {
                ch,
                position: self.position,
            }),
        }
    }
}
