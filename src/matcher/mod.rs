mod search;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::PatternInfo;
use crate::ast::AstNode;
use search::{Flow, Search};

/// Outcome of a whole-string match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Matched,
    NotMatched,
    /// The search budget ran out before a verdict was reached. Never
    /// collapsed into `NotMatched`: the caller must be able to tell a
    /// refuted pattern from an abandoned search.
    Timeout,
}

impl MatchVerdict {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchVerdict::Matched)
    }
}

const DEFAULT_STEP_LIMIT: u64 = 1_000_000;
const DEFAULT_MAX_DEPTH: usize = 8_192;

/// Resource budget for one match attempt.
///
/// Backtracking is exponential on adversarial patterns, so both limits are
/// mandatory: `step_limit` caps how many node visits the search may spend
/// and `max_depth` caps continuation nesting (which grows with the input
/// length under unbounded quantifiers). Exhausting either yields
/// [`MatchVerdict::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub step_limit: u64,
    pub max_depth: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MatchConfig {
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MatchConfigError> {
        if self.step_limit == 0 {
            return Err(MatchConfigError::StepLimitZero);
        }
        if self.max_depth == 0 {
            return Err(MatchConfigError::MaxDepthZero);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn step_limit(mut self, value: u64) -> Self {
        self.config.step_limit = value;
        self
    }

    pub fn max_depth(mut self, value: usize) -> Self {
        self.config.max_depth = value;
        self
    }

    pub fn build(self) -> Result<MatchConfig, MatchConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchConfigError {
    #[error("step_limit must be at least 1")]
    StepLimitZero,
    #[error("max_depth must be at least 1")]
    MaxDepthZero,
}

/// Decide whether `ast` matches the whole of `text`.
///
/// The pattern must account for every character from position 0 to the end;
/// there is no substring search. Matching is backtracking: greedy
/// quantifiers give repetitions back and alternations fall through to their
/// right branch whenever the rest of the pattern cannot be satisfied.
#[tracing::instrument(level = "trace", skip(ast, config), fields(text_len = text.len() as u64))]
pub fn is_match(ast: &AstNode, text: &str, config: &MatchConfig) -> MatchVerdict {
    let info = PatternInfo::of(ast);
    is_match_analyzed(ast, &info, text, config)
}

/// Match entry point for callers that already hold the pattern's
/// [`PatternInfo`] (the `Pattern` facade computes it once at compile time).
pub(crate) fn is_match_analyzed(
    ast: &AstNode,
    info: &PatternInfo,
    text: &str,
    config: &MatchConfig,
) -> MatchVerdict {
    let chars: Vec<char> = text.chars().collect();
    if !info.admits_len(chars.len()) {
        return MatchVerdict::NotMatched;
    }

    match Search::new(&chars, config).run(ast) {
        Flow::Accepted => MatchVerdict::Matched,
        Flow::Rejected => MatchVerdict::NotMatched,
        Flow::Expired => MatchVerdict::Timeout,
    }
}
