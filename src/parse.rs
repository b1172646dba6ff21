//! Text-level scanning of expressions.
//!
//! Expressions are never tokenized. Each sub-expression is classified
//! directly from its text, in this order (first match wins):
//!
//! 1. integer literal (`-12`, `+3`, `0`, any length),
//! 2. bound variable name,
//! 3. fully parenthesized expression (one outer pair is stripped),
//! 4. binary operation, split at the rightmost operator at paren depth 0,
//! 5. anything else is an unresolvable atom.
//!
//! Splitting at the *rightmost* top-level operator, regardless of its symbol,
//! groups flat chains to the left: `a-b-c` splits into `a-b` and `c`.
//!
//! A [`Scanner`] indexes the whole expression once, so every rule above is
//! answered for a sub-expression [`Span`] without rescanning its text.

use std::collections::HashMap;

use log::trace;
use num_bigint::BigInt;

use crate::ast::Node;
use crate::env::Environment;
use crate::sign::BinOp;

/// Remove all whitespace: the grammar is whitespace-insensitive.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a signed decimal integer literal.
///
/// Accepts an optional `+` or `-` followed by at least one ASCII digit and
/// nothing else.
pub fn parse_literal(text: &str) -> Option<BigInt> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -value } else { value })
}

/// Byte range `start..end` of a sub-expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Whitespace-free expression text, indexed for constant-time classification.
#[derive(Debug)]
pub struct Scanner {
    text: String,
    /// `closing[i]` is the matching `)` of the `(` at `i`.
    closing: Vec<Option<usize>>,
    /// `digits_end[i]` is the end of the run of ASCII digits starting at `i`.
    digits_end: Vec<usize>,
    /// `balance[i]` is `#')' - #'('` over `text[..i]`.
    balance: Vec<isize>,
    /// Operator positions (ascending), keyed by the balance before them.
    operators: HashMap<isize, Vec<(usize, BinOp)>>,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        let text = strip_whitespace(text);
        let bytes = text.as_bytes();
        let n = bytes.len();

        let mut closing = vec![None; n];
        let mut open = Vec::new();
        let mut balance = Vec::with_capacity(n + 1);
        let mut operators: HashMap<isize, Vec<(usize, BinOp)>> = HashMap::new();
        let mut level: isize = 0;
        balance.push(level);

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'(' => {
                    open.push(i);
                    level -= 1;
                }
                b')' => {
                    // Unmatched `)` pairs with nothing
                    if let Some(j) = open.pop() {
                        closing[j] = Some(i);
                    }
                    level += 1;
                }
                _ => {
                    if let Some(op) = BinOp::from_symbol(b as char) {
                        operators.entry(level).or_default().push((i, op));
                    }
                }
            }
            balance.push(level);
        }

        let mut digits_end = vec![n; n + 1];
        for i in (0..n).rev() {
            digits_end[i] = if bytes[i].is_ascii_digit() { digits_end[i + 1] } else { i };
        }

        Self {
            text,
            closing,
            digits_end,
            balance,
            operators,
        }
    }

    /// The whitespace-free text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span of the whole expression.
    pub fn span(&self) -> Span {
        Span::new(0, self.text.len())
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end]
    }

    /// Whether the span is an integer literal.
    pub fn is_literal(&self, span: Span) -> bool {
        let mut start = span.start;
        if start < span.end && matches!(self.text.as_bytes()[start], b'+' | b'-') {
            start += 1;
        }
        start < span.end && self.digits_end[start] == span.end
    }

    /// Strip one outer pair of parentheses if they enclose the whole span.
    ///
    /// The `(` at `start` is matched by the `)` at `end - 1` exactly when the
    /// text between them is balanced.
    pub fn strip_parens(&self, span: Span) -> Option<Span> {
        if span.len() < 2 || self.text.as_bytes()[span.start] != b'(' {
            return None;
        }
        if self.closing[span.start] == Some(span.end - 1) {
            Some(Span::new(span.start + 1, span.end - 1))
        } else {
            None
        }
    }

    /// Find the main operator: the rightmost operator at paren depth 0.
    ///
    /// Depth is counted from the right end of the span and may go negative
    /// on an unmatched `(`. An operator at `p` is at depth 0 exactly when the
    /// balance before it equals the balance at `end`.
    pub fn main_operator(&self, span: Span) -> Option<(usize, BinOp)> {
        let candidates = self.operators.get(&self.balance[span.end])?;
        let below = candidates.partition_point(|&(p, _)| p < span.end);
        let (p, op) = *candidates[..below].last()?;
        (p >= span.start).then_some((p, op))
    }

    /// Classify one sub-expression, producing a node whose children are
    /// still unparsed spans.
    pub(crate) fn layer(&self, mut span: Span, env: &Environment) -> Node<Span> {
        loop {
            let text = self.slice(span);
            if self.is_literal(span) {
                if let Some(value) = parse_literal(text) {
                    trace!("literal {:?}", text);
                    return Node::Literal(value);
                }
            }
            // Longer spans cannot be a bound name
            if span.len() <= env.longest_name() && env.contains(text) {
                trace!("variable {:?}", text);
                return Node::Variable(text.to_string());
            }
            if let Some(inner) = self.strip_parens(span) {
                span = inner;
                continue;
            }
            return match self.main_operator(span) {
                Some((i, op)) => {
                    trace!("split {:?} at {} ({})", span, i, op);
                    Node::Binary(op, Span::new(span.start, i), Span::new(i + 1, span.end))
                }
                None if is_name(text) => {
                    trace!("unbound variable {:?}", text);
                    Node::Variable(text.to_string())
                }
                None => {
                    trace!("malformed {:?}", text);
                    Node::Malformed(text.to_string())
                }
            };
        }
    }
}

/// Whether an atom can be a variable name: non-empty and free of parentheses.
fn is_name(text: &str) -> bool {
    !text.is_empty() && !text.contains(&['(', ')'][..])
}
