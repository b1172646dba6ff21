//! Sign abstract domain.
//!
//! The sign domain tracks whether a value is strictly positive, strictly
//! negative or exactly zero. Anything the rules below cannot decide is
//! `Unknown`, the top of the lattice.
//!
//! # Lattice Structure
//!
//! ```text
//!            ⊤ (unknown)
//!        /      |      \
//!     neg     zero     pos
//! ```
//!
//! The domain is deliberately coarse: `x - x` is `Unknown` for equal
//! non-zero signs, and `x / x` is not special-cased.

use std::fmt;

use num_bigint::BigInt;

use crate::lattice::Lattice;

/// Sign values tracked per variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Strictly positive (`> 0`)
    Positive,
    /// Strictly negative (`< 0`)
    Negative,
    /// Exactly zero (`= 0`)
    Zero,
    /// Top (`⊤`): any value
    Unknown,
}

impl Sign {
    /// Create sign from an arbitrary-precision integer.
    pub fn of_integer(v: &BigInt) -> Self {
        match v.sign() {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        }
    }

    /// Human-readable name, as used when reporting an environment.
    pub fn name(&self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinOp {
    /// All operators, in symbol order `+ - * /`.
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    /// Operator for a symbol, if it is one of `+ - * /`.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl TryFrom<char> for BinOp {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        BinOp::from_symbol(c).ok_or(c)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combine two signs with an operator.
///
/// `Unknown` on either side yields `Unknown` before any operator rule runs.
pub fn combine(x: Sign, y: Sign, op: BinOp) -> Sign {
    if x.is_top() || y.is_top() {
        return Sign::Unknown;
    }
    match op {
        BinOp::Add => x.add(y),
        BinOp::Sub => x.sub(y),
        BinOp::Mul => x.mul(y),
        BinOp::Div => x.div(y),
    }
}

impl Sign {
    /// Addition on signs.
    pub fn add(self, other: Sign) -> Sign {
        use Sign::*;

        match (self, other) {
            (Unknown, _) | (_, Unknown) => Unknown,

            // Zero is identity
            (Zero, s) | (s, Zero) => s,

            // Same sign is preserved, opposite signs are uncertain
            (x, y) => x.join(&y),
        }
    }

    /// Subtraction on signs.
    pub fn sub(self, other: Sign) -> Sign {
        use Sign::*;

        match (self, other) {
            (Unknown, _) | (_, Unknown) => Unknown,
            (s, Zero) => s,
            (Positive, Negative) => Positive,
            (Negative, Positive) => Negative,

            // Equal signs may cancel out, and zero minus anything is left coarse
            (Positive, Positive) | (Negative, Negative) | (Zero, Positive) | (Zero, Negative) => Unknown,
        }
    }

    /// Multiplication on signs.
    pub fn mul(self, other: Sign) -> Sign {
        use Sign::*;

        match (self, other) {
            (Unknown, _) | (_, Unknown) => Unknown,

            // Zero absorbs
            (Zero, _) | (_, Zero) => Zero,

            (Positive, Positive) | (Negative, Negative) => Positive,
            (Positive, Negative) | (Negative, Positive) => Negative,
        }
    }

    /// Division on signs.
    pub fn div(self, other: Sign) -> Sign {
        use Sign::*;

        match (self, other) {
            (Unknown, _) | (_, Unknown) => Unknown,

            // Division by zero is not an error here, just an unknown result
            (_, Zero) => Unknown,

            // Zero divided by anything (non-zero) → Zero
            (Zero, _) => Zero,

            (Positive, Positive) | (Negative, Negative) => Positive,
            (Positive, Negative) | (Negative, Positive) => Negative,
        }
    }
}
