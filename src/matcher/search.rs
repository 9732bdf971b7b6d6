use crate::ast::AstNode;
use crate::matcher::MatchConfig;

/// How a search attempt ended. `Expired` poisons the whole search: once the
/// budget is gone it propagates through every pending frame without further
/// exploration, so a timed-out search can never surface as a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Accepted,
    Rejected,
    Expired,
}

/// The work still owed to the right of the node currently being matched.
///
/// Frames form a chain through the native call stack of the search itself,
/// so backtracking is just returning: an abandoned branch drops back to the
/// caller's frame with the caller's position intact. `Repeat` records the
/// position its quantifier entered at; a repetition that comes back to the
/// same position consumed nothing and must not iterate again, otherwise a
/// nullable child loops forever.
enum Frame<'a, 'f> {
    /// Whole-string acceptance: only the end of the input satisfies it.
    Accept,
    /// Match this node next, then continue with the rest.
    Expr(&'a AstNode, &'f Frame<'a, 'f>),
    /// Inside a `*`/`+` loop: try another repetition of `child` before
    /// handing the position to `next`.
    Repeat {
        child: &'a AstNode,
        anchor: usize,
        next: &'f Frame<'a, 'f>,
    },
}

pub(crate) struct Search<'a> {
    text: &'a [char],
    steps: u64,
    depth: usize,
    max_depth: usize,
}

impl<'a> Search<'a> {
    pub(crate) fn new(text: &'a [char], config: &MatchConfig) -> Self {
        Self {
            text,
            steps: config.step_limit,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    pub(crate) fn run(&mut self, ast: &'a AstNode) -> Flow {
        self.step(ast, 0, &Frame::Accept)
    }

    /// Match one node at `pos` and, on success, hand the resulting position
    /// to the continuation. Each visit costs one step of the budget.
    fn step<'f>(&mut self, node: &'a AstNode, pos: usize, next: &'f Frame<'a, 'f>) -> Flow
    where
        'a: 'f,
    {
        if self.steps == 0 || self.depth == self.max_depth {
            return Flow::Expired;
        }
        self.steps -= 1;
        self.depth += 1;
        let flow = self.dispatch(node, pos, next);
        self.depth -= 1;
        flow
    }

    fn dispatch<'f>(&mut self, node: &'a AstNode, pos: usize, next: &'f Frame<'a, 'f>) -> Flow
    where
        'a: 'f,
    {
        match node {
            AstNode::Literal(expected) => match self.text.get(pos) {
                Some(ch) if ch == expected => self.resolve(next, pos + 1),
                _ => Flow::Rejected,
            },
            AstNode::Dot => {
                if pos < self.text.len() {
                    self.resolve(next, pos + 1)
                } else {
                    Flow::Rejected
                }
            }
            AstNode::Caret => {
                if pos == 0 {
                    self.resolve(next, pos)
                } else {
                    Flow::Rejected
                }
            }
            AstNode::Dollar => {
                if pos == self.text.len() {
                    self.resolve(next, pos)
                } else {
                    Flow::Rejected
                }
            }
            AstNode::Class(class) => match self.text.get(pos) {
                Some(&ch) if class.matches(ch) => self.resolve(next, pos + 1),
                _ => Flow::Rejected,
            },
            AstNode::Sequence(left, right) => self.step(left, pos, &Frame::Expr(right, next)),
            AstNode::Alternation(left, right) => match self.step(left, pos, next) {
                Flow::Rejected => self.step(right, pos, next),
                decided => decided,
            },
            AstNode::Star(child) => self.repeat(child, pos, next),
            AstNode::Plus(child) => {
                let child: &AstNode = child;
                self.step(
                    child,
                    pos,
                    &Frame::Repeat {
                        child,
                        anchor: pos,
                        next,
                    },
                )
            }
            AstNode::Question(child) => match self.step(child, pos, next) {
                Flow::Rejected => self.resolve(next, pos),
                decided => decided,
            },
        }
    }

    /// Greedy repetition: prefer one more occurrence of `child`, give it
    /// back and fall through to `next` when the rest cannot be satisfied.
    fn repeat<'f>(&mut self, child: &'a AstNode, pos: usize, next: &'f Frame<'a, 'f>) -> Flow
    where
        'a: 'f,
    {
        let more = Frame::Repeat {
            child,
            anchor: pos,
            next,
        };
        match self.step(child, pos, &more) {
            Flow::Rejected => self.resolve(next, pos),
            decided => decided,
        }
    }

    fn resolve<'f>(&mut self, frame: &'f Frame<'a, 'f>, pos: usize) -> Flow
    where
        'a: 'f,
    {
        match *frame {
            Frame::Accept => {
                if pos == self.text.len() {
                    Flow::Accepted
                } else {
                    Flow::Rejected
                }
            }
            Frame::Expr(node, next) => self.step(node, pos, next),
            Frame::Repeat {
                child,
                anchor,
                next,
            } => {
                if pos == anchor {
                    // Zero-width repetition: stop looping, keep what we have.
                    self.resolve(next, pos)
                } else {
                    self.repeat(child, pos, next)
                }
            }
        }
    }
}
