//! # sign-analysis: sign abstract interpretation for straight-line arithmetic
//!
//! **`sign-analysis`** computes, for every variable of a small procedure of
//! `name = expression` assignments, whether its value is **positive**,
//! **negative**, **zero**, or **unknown**, without evaluating anything
//! numerically.
//!
//! Expressions are built from integer literals, previously assigned
//! variables, parentheses and the operators `+ - * /`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use sign_analysis::{analyze_procedure, Sign};
//!
//! let env = analyze_procedure(
//!     "a = 5
//!      b = -2
//!      k = (a + (0*5)) / b",
//! )?;
//!
//! assert_eq!(env.get("a"), Some(Sign::Positive));
//! assert_eq!(env.get("b"), Some(Sign::Negative));
//! assert_eq!(env.get("k"), Some(Sign::Negative));
//! # Ok::<(), sign_analysis::ProcedureError>(())
//! ```
//!
//! ## How it works
//!
//! - Each sub-expression is classified from its text: literal, bound
//!   variable, fully parenthesized expression, or a binary operation split at
//!   the *rightmost* operator outside parentheses. Flat chains therefore
//!   group to the left (`a-b-c` is `(a-b)-c`).
//! - The expression is parsed once into an [`ExprTree`] and folded bottom-up
//!   through the [`combine`] rules of the sign domain.
//! - Anything the domain cannot decide (unknown variables, malformed
//!   operands, division by zero, `positive + negative`) is
//!   [`Sign::Unknown`]. Only structurally broken procedure lines are errors.
//!
//! ## Core Components
//!
//! - **[`sign`]**: the four-valued domain and its combination rules.
//! - **[`analyzer`]**: sign of a single expression under an [`Environment`].
//! - **[`procedure`]**: parsing and analysis of whole procedures.

pub mod analyzer;
pub mod ast;
pub mod env;
pub mod error;
pub mod lattice;
pub mod parse;
pub mod procedure;
pub mod sign;

pub use analyzer::analyze;
pub use ast::{ExprTree, Node};
pub use env::Environment;
pub use error::{ProcedureError, Result};
pub use lattice::Lattice;
pub use procedure::{analyze_procedure, Assignment, Procedure};
pub use sign::{combine, BinOp, Sign};
