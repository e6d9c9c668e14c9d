use std::vec::IntoIter;

use thiserror::Error;

use crate::lexer::{Token, TokenKind, tokenize};
use crate::source::Span;
use crate::types::{Node, Sexpr};

/// The one error kind this front end has. Malformed numeric literals are
/// not errors (they read as symbols), so only mismatched parentheses and
/// truncated input can fail a parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected ')' at {0}")]
    UnexpectedCloser(Span),
    #[error("unexpected end of input while reading")]
    UnexpectedEof,
}

// Result type alias for convenience
type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    // Owned tokens, consumed front to back. The recursion stack is the
    // only other state.
    tokens: IntoIter<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens.into_iter(),
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    /// Parses a single form from the token stream.
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        let token = self.next_token();
        self.parse_expr_with_token(token)
    }

    fn parse_expr_with_token(&mut self, token: Option<Token>) -> ParseResult<Node> {
        match token {
            Some(Token {
                kind: TokenKind::LParen,
                span,
            }) => self.parse_list(span),
            Some(Token {
                kind: TokenKind::RParen,
                span,
            }) => Err(ParseError::UnexpectedCloser(span)),
            Some(Token {
                kind: TokenKind::Atom(text),
                span,
            }) => Ok(Node::new(atom(&text), span)),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    /// Parses the elements of a list whose '(' has already been consumed,
    /// through the matching ')'.
    fn parse_list(&mut self, open: Span) -> ParseResult<Node> {
        let mut items = Vec::new();
        loop {
            match self.next_token() {
                Some(Token {
                    kind: TokenKind::RParen,
                    span,
                }) => return Ok(Node::new(Sexpr::List(items), open.merge(span))),
                Some(token) => items.push(self.parse_expr_with_token(Some(token))?),
                None => return Err(ParseError::UnexpectedEof),
            }
        }
    }

    /// Parses the first complete form. Tokens after it are deliberately
    /// left unconsumed: "99 100" reads as 99 and "(a)(b)" as (a).
    pub fn parse(mut self) -> ParseResult<Node> {
        self.parse_expr()
    }
}

/// Interprets an atom token: integer first, then float, then symbol.
/// A token like "1.2.3" that fails both numeric parses is just a symbol.
fn atom(text: &str) -> Sexpr {
    if let Ok(i) = text.parse::<i64>() {
        Sexpr::Integer(i)
    } else if let Ok(n) = text.parse::<f64>() {
        Sexpr::Float(n)
    } else {
        Sexpr::Symbol(text.to_string())
    }
}

/// Helper function to lex and parse a string directly.
pub fn parse_str(input: &str) -> ParseResult<Node> {
    Parser::new(tokenize(input)).parse()
}
