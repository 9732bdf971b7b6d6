use thiserror::Error;

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Any failure turning a pattern string into an AST. Compile errors are
/// terminal: no partial tree exists to match or canonicalize against.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type CompileResult<T> = Result<T, CompileError>;
