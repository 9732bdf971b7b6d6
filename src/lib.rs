//! A small backtracking regular-expression engine.
//!
//! Patterns support literals, `.`, the `^`/`$` anchors, `[...]` classes with
//! `-` ranges and leading-`^` negation, `(...)` grouping, `|` alternation
//! and the postfix quantifiers `*`, `+` and `?`. There is no escape syntax.
//!
//! Matching is whole-string: the pattern must account for every character of
//! the input, so `a` does not match `"ab"`. The matcher walks the AST with
//! backtracking under an explicit [`MatchConfig`] budget and reports
//! [`MatchVerdict::Timeout`] when the budget runs out, which keeps
//! adversarial patterns from blocking the caller.
//!
//! [`canonicalize`] renders a tree back to a minimal equivalent pattern
//! (sorted, range-compressed classes and folded literal runs), useful for
//! normalizing and de-duplicating patterns.
//!
//! ```
//! use retrace::{MatchVerdict, Pattern};
//!
//! let pattern = Pattern::compile("(ab)*c").unwrap();
//! assert_eq!(pattern.is_match("ababc"), MatchVerdict::Matched);
//! assert_eq!(pattern.is_match("abab"), MatchVerdict::NotMatched);
//! assert_eq!(pattern.canonical(), "(ab)*c");
//! ```

mod analysis;
mod ast;
mod canonical;
mod errors;
mod lexer;
mod matcher;
mod parser;
mod token;

pub use analysis::PatternInfo;
pub use ast::{AstNode, ClassMembers, ClassNode};
pub use canonical::canonicalize;
pub use errors::{CompileError, CompileResult};
pub use lexer::{LexError, LexResult, lex};
pub use matcher::{
    MatchConfig, MatchConfigBuilder, MatchConfigError, MatchVerdict, is_match,
};
pub use parser::{ParseError, ParseResult, parse};
pub use token::Token;

/// Compile a pattern string into its AST.
#[tracing::instrument(level = "trace")]
pub fn compile(pattern: &str) -> CompileResult<AstNode> {
    let tokens = lex(pattern)?;
    Ok(parse(&tokens)?)
}

/// A compiled pattern: the AST plus the analysis facts derived from it.
///
/// Compiling once and querying many times is the intended use; the stored
/// tree is immutable, so a `Pattern` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: String,
    ast: AstNode,
    info: PatternInfo,
}

impl Pattern {
    pub fn compile(pattern: &str) -> CompileResult<Self> {
        let ast = compile(pattern)?;
        let info = PatternInfo::of(&ast);
        Ok(Self {
            pattern: pattern.to_string(),
            ast,
            info,
        })
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn ast(&self) -> &AstNode {
        &self.ast
    }

    pub fn info(&self) -> &PatternInfo {
        &self.info
    }

    /// Whole-string match under the default budget.
    pub fn is_match(&self, text: &str) -> MatchVerdict {
        self.is_match_with(text, &MatchConfig::default())
    }

    pub fn is_match_with(&self, text: &str, config: &MatchConfig) -> MatchVerdict {
        matcher::is_match_analyzed(&self.ast, &self.info, text, config)
    }

    /// Minimal pattern string equivalent to this one.
    pub fn canonical(&self) -> String {
        canonical::canonicalize(&self.ast)
    }
}
