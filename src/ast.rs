//! Expression trees stored in a flat arena.
//!
//! An [`ExprTree`] is built once from the expression text and then folded
//! bottom-up. Both directions are iterative: building expands a work-list of
//! unparsed sub-expressions, folding sweeps the arena in reverse. Nesting
//! depth is therefore bounded only by memory, never by the call stack.

use std::collections::VecDeque;
use std::fmt;

use num_bigint::BigInt;

use crate::env::Environment;
use crate::parse::Scanner;
use crate::sign::{combine, BinOp, Sign};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Idx(usize);

/// One expression node, with children of type `I`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<I = Idx> {
    /// Integer literal.
    Literal(BigInt),
    /// Variable reference, resolved against the environment.
    Variable(String),
    /// Atom that is neither a literal, a name, nor an operation.
    Malformed(String),
    /// Binary operation: `left op right`.
    Binary(BinOp, I, I),
}

/// Borrowed view of a node whose children have already been folded into `R`.
#[derive(Debug)]
pub enum Folded<'a, R> {
    Literal(&'a BigInt),
    Variable(&'a str),
    Malformed(&'a str),
    Binary(BinOp, R, R),
}

impl<A> Node<A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Node<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Node::Literal(value) => Node::Literal(value),
            Node::Variable(name) => Node::Variable(name),
            Node::Malformed(text) => Node::Malformed(text),
            Node::Binary(op, a, b) => {
                let a = f(a);
                let b = f(b);
                Node::Binary(op, a, b)
            }
        }
    }

    #[inline(always)]
    pub fn fmap_ref<B, F>(&self, mut f: F) -> Folded<'_, B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Node::Literal(value) => Folded::Literal(value),
            Node::Variable(name) => Folded::Variable(name),
            Node::Malformed(text) => Folded::Malformed(text),
            Node::Binary(op, a, b) => {
                let a = f(a);
                let b = f(b);
                Folded::Binary(*op, a, b)
            }
        }
    }
}

// See: https://recursion.wtf/posts/rust_schemes/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprTree {
    /// Topology sorted nodes (parents before children), by construction.
    nodes: Vec<Node>,
}

impl ExprTree {
    /// Parse an expression with no bound names.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &Environment::new())
    }

    /// Parse an expression, treating every name bound in `env` as a variable
    /// reference (after literals, before any other rule).
    pub fn parse_with(text: &str, env: &Environment) -> Self {
        let scanner = Scanner::new(text);
        Self::expand_nodes(scanner.span(), |span| scanner.layer(span, env))
    }

    fn expand_nodes<S, F>(seed: S, mut expand: F) -> Self
    where
        F: FnMut(S) -> Node<S>,
    {
        let mut frontier: VecDeque<S> = VecDeque::from([seed]);
        let mut nodes: Vec<Node> = vec![];

        while let Some(seed) = frontier.pop_front() {
            let node = expand(seed).fmap(|child| {
                frontier.push_back(child);
                Idx(nodes.len() + frontier.len())
            });
            nodes.push(node);
        }

        Self { nodes }
    }

    fn collapse_nodes<R, F>(&self, mut collapse: F) -> R
    where
        F: FnMut(Folded<'_, R>) -> R,
    {
        let mut results: Vec<Option<R>> = std::iter::repeat_with(|| None).take(self.nodes.len()).collect();

        for (i, node) in self.nodes.iter().enumerate().rev() {
            let node = node.fmap_ref(|idx| results[idx.0].take().expect("children are folded before parents"));
            results[i] = Some(collapse(node));
        }

        results.into_iter().next().flatten().expect("tree has a root")
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn get(&self, idx: Idx) -> &Node {
        &self.nodes[idx.0]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Evaluate the sign of the expression under `env`.
    ///
    /// Unbound variables and malformed atoms evaluate to `Unknown`.
    pub fn eval(&self, env: &Environment) -> Sign {
        self.collapse_nodes(|node| match node {
            Folded::Literal(value) => Sign::of_integer(value),
            Folded::Variable(name) => env.lookup(name),
            Folded::Malformed(_) => Sign::Unknown,
            Folded::Binary(op, x, y) => combine(x, y, op),
        })
    }
}

impl fmt::Display for ExprTree {
    /// Fully parenthesized rendering, e.g. `((a - b) - c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Node(&'a Node),
            Op(BinOp),
            Close,
        }

        let mut stack = vec![Step::Node(self.root())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Node(Node::Literal(value)) => write!(f, "{}", value)?,
                Step::Node(Node::Variable(name)) => f.write_str(name)?,
                Step::Node(Node::Malformed(text)) => write!(f, "<{}>", text)?,
                Step::Node(Node::Binary(op, a, b)) => {
                    f.write_str("(")?;
                    stack.push(Step::Close);
                    stack.push(Step::Node(self.get(*b)));
                    stack.push(Step::Op(*op));
                    stack.push(Step::Node(self.get(*a)));
                }
                Step::Op(op) => write!(f, " {} ", op)?,
                Step::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
