//! Straight-line procedures: sequences of `name = expression` lines.

use std::str::FromStr;

use log::debug;

use crate::analyzer::analyze;
use crate::env::Environment;
use crate::error::{ProcedureError, Result};

/// A single `target = expr` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// 1-based line number in the procedure text.
    pub line: usize,
    pub target: String,
    pub expr: String,
}

impl Assignment {
    /// Parse one non-blank line, splitting at its first `=`.
    pub fn parse(line: usize, text: &str) -> Result<Self> {
        let Some((target, expr)) = text.split_once('=') else {
            return Err(ProcedureError::MissingAssignment {
                line,
                text: text.trim().to_string(),
            });
        };
        let target = target.trim();
        if target.is_empty() {
            return Err(ProcedureError::EmptyTarget {
                line,
                text: text.trim().to_string(),
            });
        }
        Ok(Self {
            line,
            target: target.to_string(),
            expr: expr.trim().to_string(),
        })
    }
}

/// A validated procedure.
///
/// Parsing rejects the whole procedure on the first malformed line, before
/// anything is analyzed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Procedure {
    assignments: Vec<Assignment>,
}

impl Procedure {
    /// Parse procedure text. Blank and whitespace-only lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let assignments = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| Assignment::parse(i + 1, line))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { assignments })
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Analyze every assignment in order, binding each target in `env`.
    ///
    /// Each expression sees only the bindings made before it (plus whatever
    /// `env` already held). Reassignment overwrites the previous sign.
    pub fn run(&self, env: &mut Environment) {
        for assignment in &self.assignments {
            let sign = analyze(&assignment.expr, env);
            debug!("line {}: {} := {}", assignment.line, assignment.target, sign);
            env.bind(assignment.target.as_str(), sign);
        }
    }

    /// Analyze the procedure from an empty environment.
    pub fn analyze(&self) -> Environment {
        let mut env = Environment::new();
        self.run(&mut env);
        env
    }
}

impl FromStr for Procedure {
    type Err = ProcedureError;

    fn from_str(s: &str) -> Result<Self> {
        Procedure::parse(s)
    }
}

/// Compute the sign of every variable assigned in `text`.
///
/// ```
/// use sign_analysis::{analyze_procedure, Sign};
///
/// let env = analyze_procedure("a = 5\nb = -2\nc = a + b").unwrap();
/// assert_eq!(env.get("a"), Some(Sign::Positive));
/// assert_eq!(env.get("b"), Some(Sign::Negative));
/// assert_eq!(env.get("c"), Some(Sign::Unknown));
/// ```
///
/// # Errors
///
/// Returns a [`ProcedureError`] if a non-blank line has no `=` or no target
/// name. No analysis is done in that case.
pub fn analyze_procedure(text: &str) -> Result<Environment> {
    let procedure = Procedure::parse(text)?;
    debug!("analyzing {} assignments", procedure.assignments.len());
    Ok(procedure.analyze())
}
