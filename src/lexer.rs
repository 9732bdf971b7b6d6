use thiserror::Error;

use crate::token::Token;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("character class opened at byte {start} of '{pattern}' is never closed")]
    UnterminatedClass { pattern: String, start: usize },
}

pub type LexResult<T> = Result<T, LexError>;

/// Tokenize a pattern string.
///
/// Outside a character class every character classifies on its own. Inside
/// `[...]` everything is an ordinary member until the closing `]`, with two
/// exceptions: `-` lexes as `Dash` (the parser decides whether it forms a
/// range) and a `^` directly behind the `[` lexes as `Caret` so the parser
/// can flag the class as negated. A terminating `End` token is always
/// appended.
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn lex(pattern: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(pattern.len() + 1);
    let mut class_start: Option<usize> = None;
    let mut first_in_class = false;

    for (offset, ch) in pattern.char_indices() {
        if class_start.is_some() {
            let token = match ch {
                ']' => {
                    class_start = None;
                    Token::RBracket
                }
                '-' => Token::Dash,
                '^' if first_in_class => Token::Caret,
                other => Token::Literal(other),
            };
            first_in_class = false;
            tokens.push(token);
            continue;
        }

        let token = match ch {
            '.' => Token::Dot,
            '^' => Token::Caret,
            '$' => Token::Dollar,
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::Question,
            '|' => Token::Pipe,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ']' => Token::RBracket,
            '-' => Token::Dash,
            '[' => {
                class_start = Some(offset);
                first_in_class = true;
                Token::LBracket
            }
            other => Token::Literal(other),
        };
        tokens.push(token);
    }

    if let Some(start) = class_start {
        return Err(LexError::UnterminatedClass {
            pattern: pattern.to_string(),
            start,
        });
    }

    tokens.push(Token::End);
    Ok(tokens)
}
