//! Expression sign analysis.

use log::debug;

use crate::ast::ExprTree;
use crate::env::Environment;
use crate::sign::Sign;

/// Determine the sign of an expression under `env`.
///
/// Never fails: unbound variables, malformed sub-expressions, division by
/// zero and ambiguous combinations all resolve to [`Sign::Unknown`].
///
/// ```
/// use sign_analysis::{analyze, Environment, Sign};
///
/// let mut env = Environment::new();
/// env.bind("a", Sign::Positive);
/// env.bind("b", Sign::Negative);
///
/// assert_eq!(analyze("(a + (0*5)) / b", &env), Sign::Negative);
/// assert_eq!(analyze("a + b", &env), Sign::Unknown);
/// assert_eq!(analyze("a / 0", &env), Sign::Unknown);
/// ```
pub fn analyze(expr: &str, env: &Environment) -> Sign {
    let tree = ExprTree::parse_with(expr, env);
    let sign = tree.eval(env);
    debug!("analyze({:?}) = {} => {}", expr, tree, sign);
    sign
}
