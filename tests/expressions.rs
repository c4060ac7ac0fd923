use std::{collections::HashMap, fs};

use varcalc::{EvalError, evaluate, parse};
use walkdir::WalkDir;

const EPSILON: f64 = 1e-9;

fn assert_evaluates(expression: &str, expected: f64) {
    match evaluate(expression) {
        Ok(value) => {
            assert!((value - expected).abs() < EPSILON,
                    "{expression} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{expression} failed to evaluate: {e}"),
    }
}

/// Runs an expression through both strategies and checks they agree on the
/// expected value.
fn assert_both_strategies(expression: &str, expected: f64) {
    assert_evaluates(expression, expected);

    let tree = parse(expression).unwrap_or_else(|e| panic!("{expression} failed to parse: {e}"));
    let value = tree.evaluate(&HashMap::new())
                    .unwrap_or_else(|e| panic!("{expression} failed to evaluate as a tree: {e}"));

    assert!((value - expected).abs() < EPSILON,
            "{expression} evaluated to {value} as a tree, expected {expected}");
}

#[test]
fn precedence_and_grouping() {
    assert_both_strategies("2+3*4", 14.0);
    assert_both_strategies("(2+3)*4", 20.0);
    assert_both_strategies("2^3 + 5", 13.0);
    assert_both_strategies("10 % 3", 1.0);
    assert_both_strategies("9 - 2 - 3", 4.0);
    assert_both_strategies("12 / 4 / 3", 1.0);
    assert_both_strategies("2 * (3 + 4) ^ 2", 98.0);
}

#[test]
fn exponentiation_folds_left_to_right() {
    // Equal-priority operators fold left to right, so this is (2^3)^2,
    // not 2^(3^2).
    assert_both_strategies("2^3^2", 64.0);
}

#[test]
fn decimals() {
    assert_both_strategies("1.5 + 2.25", 3.75);
    assert_both_strategies(".5 * 4", 2.0);
    assert_both_strategies("0.1 * 10", 1.0);
}

#[test]
fn unary_minus() {
    assert_both_strategies("-5 + 3", -2.0);
    assert_both_strategies("(-5) + 3", -2.0);
    assert_both_strategies("2 * -3", -6.0);
    assert_both_strategies("-(2 + 3)", -5.0);
    assert_both_strategies("--5", 5.0);
    assert_both_strategies("2 ^ -2", 0.25);
}

#[test]
fn named_functions() {
    assert_both_strategies("sqrt(16) * 2^3", 32.0);
    assert_both_strategies("abs(-5) + ceil(4.3)", 10.0);
    assert_both_strategies("sin(30) + cos(60)", 1.0);
    assert_both_strategies("floor(4.7) + round(2.4)", 6.0);
    assert_both_strategies("log(100) + log2(8)", 5.0);
    assert_both_strategies("ln(exp(2))", 2.0);
    assert_both_strategies("cbrt(27) + sq(3)", 12.0);
    assert_both_strategies("arcsin(1) + arccos(1)", 90.0);
    assert_both_strategies("atan(tan(45))", 45.0);
    assert_both_strategies("sinr(0) + cosr(0)", 1.0);
    assert_both_strategies("sin(cos(90) + 30)", 0.5);
}

#[test]
fn function_names_are_case_insensitive() {
    assert_both_strategies("SIN(90)", 1.0);
    assert_both_strategies("Sqrt(25)", 5.0);
}

#[test]
fn numeric_edge_cases_are_not_trapped() {
    assert!(evaluate("1 / 0").unwrap().is_infinite());
    assert!(evaluate("sqrt(-1)").unwrap().is_nan());
    assert!(evaluate("log(-1)").unwrap().is_nan());
}

#[test]
fn strategies_agree_on_variable_free_expressions() {
    let expressions = ["1 + 2 * 3 - 4 / 5",
                       "2 ^ 3 ^ 2",
                       "-3 + 4 * -2",
                       "(1 + 2) * (3 + 4) / 7",
                       "10 % 4 + 2.5 * 4",
                       "sqrt(81) - cbrt(8)",
                       "2 ^ -2 + sq(1.5)",
                       "sin(45) * sin(45) + cos(45) * cos(45)"];

    for expression in expressions {
        let direct = evaluate(expression).unwrap();
        let tree = parse(expression).unwrap()
                                    .evaluate(&HashMap::new())
                                    .unwrap();

        assert!((direct - tree).abs() < EPSILON,
                "strategies disagree on {expression}: {direct} vs {tree}");
    }
}

#[test]
fn variables_resolve_against_bindings() {
    let tree = parse("x + 1").unwrap();

    assert!(matches!(tree.evaluate(&HashMap::new()),
                     Err(EvalError::UndefinedVariable { name }) if name == "x"));

    let bindings = HashMap::from([("x".to_string(), 4.0)]);
    assert_eq!(tree.evaluate(&bindings).unwrap(), 5.0);
}

#[test]
fn formula_reused_across_events() {
    let tree = parse("base * (1 + level * 0.1) + sqrt(bonus)").unwrap();

    for (level, bonus, expected) in [(0.0, 16.0, 14.0), (5.0, 25.0, 20.0), (10.0, 0.0, 20.0)] {
        let bindings = HashMap::from([("base".to_string(), 10.0),
                                      ("level".to_string(), level),
                                      ("bonus".to_string(), bonus)]);
        let value = tree.evaluate(&bindings).unwrap();

        assert!((value - expected).abs() < EPSILON,
                "level {level} produced {value}, expected {expected}");
    }
}

#[test]
fn parsing_is_deterministic_and_evaluation_is_pure() {
    let first = parse("2 * x + sin(x)").unwrap();
    let second = parse("2 * x + sin(x)").unwrap();
    assert_eq!(first, second);

    let bindings = HashMap::from([("x".to_string(), 90.0)]);
    assert_eq!(first.evaluate(&bindings).unwrap(),
               first.evaluate(&bindings).unwrap());
    assert_eq!(first.evaluate(&bindings).unwrap(),
               second.evaluate(&bindings).unwrap());
}

#[test]
fn unknown_function_is_error() {
    assert!(matches!(evaluate("foo(1)"),
                     Err(EvalError::UnknownFunction { name }) if name == "foo"));

    let tree = parse("foo(1)").unwrap();
    assert!(matches!(tree.evaluate(&HashMap::new()),
                     Err(EvalError::UnknownFunction { name }) if name == "foo"));
}

#[test]
fn malformed_expressions_are_errors() {
    assert!(matches!(evaluate(""), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("   "), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("(2 + 3"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("2 + 3)"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("2 +"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(evaluate("* 2"), Err(EvalError::MalformedExpression { .. })));

    assert!(matches!(parse(""), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(parse("(2 + 3"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(parse("2 + 3)"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(parse("2 +"), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(parse("sin()"), Err(EvalError::MalformedExpression { .. })));
}

#[test]
fn case_files_evaluate_to_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| {
                                       e.path().extension().is_some_and(|ext| ext == "calc")
                                   })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // `=` is not part of the expression grammar, so splitting on the
            // last one is unambiguous.
            let (expression, expected) =
                line.rsplit_once('=')
                    .unwrap_or_else(|| panic!("Malformed case line in {path:?}: {line}"));
            let expected: f64 = expected.trim()
                                        .parse()
                                        .unwrap_or_else(|e| {
                                            panic!("Bad expected value in {path:?}: {line}: {e}")
                                        });

            count += 1;
            match evaluate(expression) {
                Ok(value) => {
                    assert!((value - expected).abs() < EPSILON,
                            "{expression} evaluated to {value}, expected {expected} ({path:?})");
                },
                Err(e) => panic!("{expression} failed in {path:?}: {e}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}
