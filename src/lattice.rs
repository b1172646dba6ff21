//! Flat join-semilattice interface.

use std::fmt::Debug;

use crate::sign::Sign;

/// Join-semilattice with a top element.
///
/// # Lattice Properties
///
/// - Idempotence: `a ⊔ a = a`
/// - Commutativity and associativity of `⊔`
/// - Top absorbs: `a ⊔ ⊤ = ⊤`
pub trait Lattice: Copy + Debug + Eq {
    /// The top element (⊤): represents any value.
    fn top() -> Self;

    /// Check if an element is top.
    fn is_top(&self) -> bool {
        *self == Self::top()
    }

    /// Join (`⊔`): least upper bound.
    fn join(&self, other: &Self) -> Self;
}

impl Lattice for Sign {
    fn top() -> Self {
        Sign::Unknown
    }

    fn join(&self, other: &Self) -> Self {
        if self == other {
            *self
        } else {
            Sign::Unknown
        }
    }
}
