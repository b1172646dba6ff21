//! End-to-end analysis of whole procedures.

use sign_analysis::*;

use test_log::test;

fn signs(env: &Environment) -> Vec<(&str, Sign)> {
    env.iter().collect()
}

#[test]
fn test_opposite_signs_are_ambiguous() {
    let env = analyze_procedure("a = 5\nb = -2\nc = a + b").unwrap();
    assert_eq!(
        signs(&env),
        vec![("a", Sign::Positive), ("b", Sign::Negative), ("c", Sign::Unknown)]
    );
}

#[test]
fn test_parenthesized_division() {
    let env = analyze_procedure("a = 5\nb = -2\nk = (a + (0*5)) / b").unwrap();
    assert_eq!(
        signs(&env),
        vec![("a", Sign::Positive), ("b", Sign::Negative), ("k", Sign::Negative)]
    );
}

#[test]
fn test_zero_divisor() {
    let env = analyze_procedure("a = 0\nb = a / a").unwrap();
    assert_eq!(signs(&env), vec![("a", Sign::Zero), ("b", Sign::Unknown)]);
}

#[test]
fn test_reassignment_overwrites() {
    let env = analyze_procedure("a = 5\na = -3").unwrap();
    assert_eq!(signs(&env), vec![("a", Sign::Negative)]);
}

#[test]
fn test_unknown_variables_do_not_fail() {
    let env = analyze_procedure("c = a + b").unwrap();
    assert_eq!(signs(&env), vec![("c", Sign::Unknown)]);
}

#[test]
fn test_sample_procedure() {
    let text = "
        a = 5
        b = -2
        c = a + b
        d = a - b
        e = a * b
        f = d + e
        g = f - b
        h = g * 2
        j = (a - b) * (b + 3)
        k = (a + e) / b
    ";
    let env = analyze_procedure(text).unwrap();

    use Sign::*;
    assert_eq!(
        signs(&env),
        vec![
            ("a", Positive),
            ("b", Negative),
            ("c", Unknown),
            ("d", Positive),
            ("e", Negative),
            ("f", Unknown),
            ("g", Unknown),
            ("h", Unknown),
            ("j", Unknown),
            ("k", Unknown),
        ]
    );
    assert_eq!(env.to_string().lines().next(), Some("a: positive"));
}

#[test]
fn test_second_sample_procedure() {
    let text = "
        a = 1
        b = -1
        c = a + b
        d = a - b
        e = d * d + a
        f = 3
        f = (f + e) * (b - d)
        g = c + c
        h = b - (0 - f)
        j = -2 / -2
        k = (h - j) / (b - 0)
    ";
    let env = analyze_procedure(text).unwrap();

    use Sign::*;
    assert_eq!(env.get("d"), Some(Positive));
    assert_eq!(env.get("e"), Some(Positive));
    assert_eq!(env.get("f"), Some(Negative));
    assert_eq!(env.get("g"), Some(Unknown));
    assert_eq!(env.get("h"), Some(Unknown));
    // `-2 / -2` splits at the second minus: `(-2/) - 2`
    assert_eq!(env.get("j"), Some(Unknown));
    assert_eq!(env.get("k"), Some(Unknown));
    assert_eq!(env.len(), 10);
}

#[test]
fn test_missing_assignment_is_reported() {
    let err = analyze_procedure("a = 1\n\nb + 2\nc = 3").unwrap_err();
    assert_eq!(
        err,
        ProcedureError::MissingAssignment {
            line: 3,
            text: "b + 2".to_string()
        }
    );
}

#[test]
fn test_empty_target_is_reported() {
    let err = analyze_procedure("a = 1\n  = a").unwrap_err();
    assert!(matches!(err, ProcedureError::EmptyTarget { line: 2, .. }));
}

#[test]
fn test_deeply_nested_expression() {
    let depth = 5_000;
    let text = format!("x = -7\ny = {}x{}", "(".repeat(depth), ")".repeat(depth));
    let env = analyze_procedure(&text).unwrap();
    assert_eq!(env.get("y"), Some(Sign::Negative));
}

#[test]
fn test_nesting_scales_linearly() {
    let depth = 100_000;
    let text = format!(
        "x = -7\ny = {}x{}\nz = {}y{}",
        "(".repeat(depth),
        ")".repeat(depth),
        "(y*".repeat(depth),
        ")".repeat(depth)
    );

    let start = std::time::Instant::now();
    let env = analyze_procedure(&text).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(env.get("y"), Some(Sign::Negative));
    // Odd number of negative factors
    assert_eq!(env.get("z"), Some(Sign::Negative));
    assert!(elapsed.as_secs() < 10, "took {:?}", elapsed);
}

#[test]
fn test_expression_tree_matches_analysis() {
    let env = analyze_procedure("p = 4\nn = -4").unwrap();
    let text = "p * (n - p) / n";
    let tree = ExprTree::parse_with(text, &env);
    assert_eq!(tree.to_string(), "((p * (n - p)) / n)");
    assert_eq!(tree.eval(&env), analyze(text, &env));
    assert_eq!(tree.eval(&env), Sign::Positive);
}
