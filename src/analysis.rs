use crate::ast::AstNode;

/// Facts derived from a parsed pattern before any matching runs.
///
/// The length bounds are conservative: every successful whole-string match
/// consumes at least `min_len` and at most `max_len` characters, so the
/// matcher can reject inputs outside those bounds without searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternInfo {
    /// Fewest characters any successful match consumes.
    pub min_len: usize,
    /// Most characters any successful match consumes; `None` when a `*` or
    /// `+` makes the pattern unbounded.
    pub max_len: Option<usize>,
    /// Every match is forced to begin with a `^` assertion.
    pub anchored_start: bool,
    /// Every match is forced to end with a `$` assertion.
    pub anchored_end: bool,
}

impl PatternInfo {
    pub fn of(ast: &AstNode) -> Self {
        Self {
            min_len: min_len(ast),
            max_len: max_len(ast),
            anchored_start: anchored_start(ast),
            anchored_end: anchored_end(ast),
        }
    }

    /// Whether an input of `len` characters could possibly match.
    pub fn admits_len(&self, len: usize) -> bool {
        if len < self.min_len {
            return false;
        }
        match self.max_len {
            Some(max) => len <= max,
            None => true,
        }
    }
}

fn min_len(node: &AstNode) -> usize {
    match node {
        AstNode::Literal(_) | AstNode::Dot | AstNode::Class(_) => 1,
        AstNode::Caret | AstNode::Dollar => 0,
        AstNode::Sequence(left, right) => min_len(left) + min_len(right),
        AstNode::Alternation(left, right) => min_len(left).min(min_len(right)),
        AstNode::Star(_) | AstNode::Question(_) => 0,
        AstNode::Plus(child) => min_len(child),
    }
}

fn max_len(node: &AstNode) -> Option<usize> {
    match node {
        AstNode::Literal(_) | AstNode::Dot | AstNode::Class(_) => Some(1),
        AstNode::Caret | AstNode::Dollar => Some(0),
        AstNode::Sequence(left, right) => match (max_len(left), max_len(right)) {
            (Some(left), Some(right)) => Some(left + right),
            _ => None,
        },
        AstNode::Alternation(left, right) => match (max_len(left), max_len(right)) {
            (Some(left), Some(right)) => Some(left.max(right)),
            _ => None,
        },
        // A repeated zero-width node still consumes nothing.
        AstNode::Star(child) | AstNode::Plus(child) => match max_len(child) {
            Some(0) => Some(0),
            _ => None,
        },
        AstNode::Question(child) => max_len(child),
    }
}

fn anchored_start(node: &AstNode) -> bool {
    match node {
        AstNode::Caret => true,
        AstNode::Sequence(left, _) => anchored_start(left),
        AstNode::Alternation(left, right) => anchored_start(left) && anchored_start(right),
        AstNode::Plus(child) => anchored_start(child),
        _ => false,
    }
}

fn anchored_end(node: &AstNode) -> bool {
    match node {
        AstNode::Dollar => true,
        AstNode::Sequence(_, right) => anchored_end(right),
        AstNode::Alternation(left, right) => anchored_end(left) && anchored_end(right),
        AstNode::Plus(child) => anchored_end(child),
        _ => false,
    }
}
