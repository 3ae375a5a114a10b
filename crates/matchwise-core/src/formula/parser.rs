//! Tokenizer and recursive-descent parser for the formula grammar.
//!
//! Grammar (precedence high to low: `~`, `&`, `|`; left-associative):
//!
//! ```text
//! expr   := term ('|' term)*
//! term   := factor ('&' factor)*
//! factor := '~' factor | '(' expr ')' | IDENT
//! IDENT  := [A-Za-z_][A-Za-z0-9_]*
//! ```
//!
//! Errors carry the byte offset of the offending token.

use crate::error::{CoreError, CoreResult};

use super::ast::Expr;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Amp,
    Pipe,
    Tilde,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Self::Ident(name) => format!("identifier `{name}`"),
            Self::Amp => "`&`".to_string(),
            Self::Pipe => "`|`".to_string(),
            Self::Tilde => "`~`".to_string(),
            Self::LParen => "`(`".to_string(),
            Self::RParen => "`)`".to_string(),
        }
    }
}

fn tokenize(input: &str) -> CoreResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '&' => {
                chars.next();
                tokens.push((Token::Amp, pos));
            }
            '|' => {
                chars.next();
                tokens.push((Token::Pipe, pos));
            }
            '~' => {
                chars.next();
                tokens.push((Token::Tilde, pos));
            }
            '(' => {
                chars.next();
                tokens.push((Token::LParen, pos));
            }
            ')' => {
                chars.next();
                tokens.push((Token::RParen, pos));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((Token::Ident(ident), pos));
            }
            c => {
                return Err(CoreError::parse(pos, format!("unexpected character `{c}`")));
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    cursor: usize,
    /// Byte length of the source, for end-of-input error positions.
    end: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().map(|(t, _)| t) == Some(expected) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> CoreResult<Expr> {
        let mut lhs = self.term()?;
        while self.eat(&Token::Pipe) {
            let rhs = self.term()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> CoreResult<Expr> {
        let mut lhs = self.factor()?;
        while self.eat(&Token::Amp) {
            let rhs = self.factor()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> CoreResult<Expr> {
        match self.advance() {
            Some((Token::Tilde, _)) => Ok(Expr::Not(Box::new(self.factor()?))),
            Some((Token::LParen, open_pos)) => {
                let inner = self.expr()?;
                if self.eat(&Token::RParen) {
                    Ok(inner)
                } else {
                    let pos = self.peek().map(|&(_, p)| p).unwrap_or(self.end);
                    Err(CoreError::parse(
                        pos,
                        format!("unclosed `(` opened at {open_pos}"),
                    ))
                }
            }
            Some((Token::Ident(name), _)) => Ok(Expr::Var(name)),
            Some((tok, pos)) => Err(CoreError::parse(
                pos,
                format!("expected identifier, `~`, or `(`, found {}", tok.describe()),
            )),
            None => Err(CoreError::parse(
                self.end,
                "unexpected end of formula".to_string(),
            )),
        }
    }
}

/// Parse a formula source string into an [`Expr`].
///
/// # Errors
/// [`CoreError::Parse`] with the byte offset of the first offending
/// token; the empty string is rejected the same way.
pub fn parse(input: &str) -> CoreResult<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens,
        cursor: 0,
        end: input.len(),
    };
    let expr = parser.expr()?;
    if let Some((tok, pos)) = parser.peek() {
        return Err(CoreError::parse(
            *pos,
            format!("trailing input: {}", tok.describe()),
        ));
    }
    Ok(expr)
}
