//! Variable environment: the abstract state of a procedure.

use std::fmt;

use indexmap::IndexMap;

use crate::sign::Sign;

/// Mapping from variable names to their signs.
///
/// Iteration follows insertion order. Rebinding a name replaces its sign but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    signs: IndexMap<String, Sign>,
    /// Length in bytes of the longest bound name.
    longest_name: usize,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.signs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// Check if a variable is bound.
    pub fn contains(&self, var: &str) -> bool {
        self.signs.contains_key(var)
    }

    /// Get the sign of a variable, if it is bound.
    pub fn get(&self, var: &str) -> Option<Sign> {
        self.signs.get(var).copied()
    }

    /// Get the sign of a variable (returns `Unknown` if not bound).
    pub fn lookup(&self, var: &str) -> Sign {
        self.get(var).unwrap_or(Sign::Unknown)
    }

    /// Length in bytes of the longest bound name (`0` when empty).
    pub fn longest_name(&self) -> usize {
        self.longest_name
    }

    /// Bind a variable, returning its previous sign.
    pub fn bind(&mut self, var: impl Into<String>, sign: Sign) -> Option<Sign> {
        let var = var.into();
        self.longest_name = self.longest_name.max(var.len());
        self.signs.insert(var, sign)
    }

    /// Iterate over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Sign)> + '_ {
        self.signs.iter().map(|(var, &sign)| (var.as_str(), sign))
    }
}

impl<S: Into<String>> FromIterator<(S, Sign)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Sign)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (var, sign) in iter {
            env.bind(var, sign);
        }
        env
    }
}

impl<S: Into<String>> Extend<(S, Sign)> for Environment {
    fn extend<I: IntoIterator<Item = (S, Sign)>>(&mut self, iter: I) {
        for (var, sign) in iter {
            self.bind(var, sign);
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, sign) in self.iter() {
            writeln!(f, "{}: {}", var, sign)?;
        }
        Ok(())
    }
}
