use std::fs;

use sciexpr::{
    AngleMode, EvalContext, Error, ParserConfig, evaluate, evaluate_str, evaluate_str_with,
    error::{EvalError, LexError, ParseError},
    parse, tokenize,
};
use walkdir::WalkDir;

const EPSILON: f64 = 1e-9;

fn radians() -> EvalContext {
    EvalContext::new(AngleMode::Radians)
}

fn degrees() -> EvalContext {
    EvalContext::new(AngleMode::Degrees)
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = EPSILON * expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}");
}

fn assert_value(src: &str, context: &EvalContext, expected: f64) {
    match evaluate_str(src, context) {
        Ok(value) => assert_close(value, expected),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate_str(src, &radians()) {
        Ok(value) => panic!("Expression '{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn case_files_evaluate_as_listed() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut context = radians();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(mode) = line.strip_prefix("@mode ") {
                context = EvalContext::new(mode.parse().unwrap());
                continue;
            }

            let (source, expected) =
                line.split_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            let (source, expected) = (source.trim(), expected.trim());
            let result = evaluate_str(source, &context);
            count += 1;

            if expected == "error" {
                assert!(result.is_err(),
                        "{path:?}:{}: '{source}' should fail, got {result:?}",
                        i + 1);
            } else {
                let expected: f64 = expected.parse().unwrap();
                let value =
                    result.unwrap_or_else(|e| panic!("{path:?}:{}: '{source}' failed: {e}", i + 1));
                assert_close(value, expected);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", &radians(), 14.0);
    assert_value("(2+3)*4", &radians(), 20.0);
    assert_value("2^3^2", &radians(), 512.0);
    assert_value("10-4-3", &radians(), 3.0);
    assert_value("64/4/2", &radians(), 8.0);
    assert_value("-2^2", &radians(), -4.0);
    assert_value("2^-1", &radians(), 0.5);
}

#[test]
fn factorial_binds_tighter_than_binary_operators() {
    assert_value("3!+1", &radians(), 7.0);
    assert_value("2*3!", &radians(), 12.0);
    assert_value("0!", &radians(), 1.0);
    assert_value("3!!", &radians(), 720.0);
    assert_value("-3!", &radians(), -6.0);
    assert_value("20!", &radians(), 2_432_902_008_176_640_000.0);
}

#[test]
fn angle_mode_only_affects_trigonometry() {
    assert_value("sin(90)", &degrees(), 1.0);
    assert_value("sin(90)", &radians(), 0.893_996_663_6);
    assert_value("cos(60)", &degrees(), 0.5);
    assert_value("tan(45)", &degrees(), 1.0);
    assert_value("sqrt(16)", &degrees(), 4.0);
    assert_value("log(1000)", &degrees(), 3.0);
}

#[test]
fn nested_trig_converts_each_argument_once() {
    // The inner result is a plain number; only the outer argument is treated
    // as degrees again.
    let inner = 30.0_f64.to_radians().sin();
    assert_value("sin(sin(30))", &degrees(), inner.to_radians().sin());
}

#[test]
fn same_tree_evaluates_differently_per_mode() {
    let expr = parse(&tokenize("cos(180)").unwrap()).unwrap();
    assert_close(evaluate(&expr, &degrees()).unwrap(), -1.0);
    assert_close(evaluate(&expr, &radians()).unwrap(), 180.0_f64.cos());
}

#[test]
fn constants_and_keypad_symbols() {
    assert_value("π", &radians(), std::f64::consts::PI);
    assert_value("pi", &radians(), std::f64::consts::PI);
    assert_value("e^1", &radians(), std::f64::consts::E);
    assert_value("ln(e)", &radians(), 1.0);
    assert_value("2×π÷2", &radians(), std::f64::consts::PI);
    assert_value("√(9)", &radians(), 3.0);
}

#[test]
fn evaluation_is_deterministic() {
    let src = "sqrt(2)*ln(7)/tan(0.3)+e^π-4!";
    let first = evaluate_str(src, &radians()).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate_str(src, &radians()).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn evaluation_is_reentrant_across_threads() {
    let context = degrees();
    let handles: Vec<_> =
        (0..4).map(|_| std::thread::spawn(move || evaluate_str("sin(30)*2+3!", &context).unwrap()))
              .collect();
    for handle in handles {
        assert_close(handle.join().unwrap(), 7.0);
    }
}

#[test]
fn domain_errors() {
    for src in ["sqrt(-1)", "log(0)", "ln(-2)", "(-8)^(1/3)", "2.5!", "(-1)!", "10^400"] {
        assert!(matches!(assert_failure(src), Error::Eval(EvalError::DomainError { .. })),
                "'{src}' should be a domain error");
    }
}

#[test]
fn division_by_zero_and_overflow() {
    assert_eq!(assert_failure("1/0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("1/(2-2)"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(assert_failure("25!"), Error::Eval(EvalError::Overflow));
    assert_eq!(assert_failure("21!"), Error::Eval(EvalError::Overflow));
}

#[test]
fn syntax_errors() {
    assert_eq!(assert_failure("2+"), Error::Parse(ParseError::UnexpectedEnd { position: 2 }));
    assert_eq!(assert_failure("(2+3"),
               Error::Parse(ParseError::UnclosedParen { position: 0 }));
    assert_eq!(assert_failure("2@3"),
               Error::Lex(LexError::UnknownToken { position: 1,
                                                   text:     "@".to_string(), }));
    assert!(matches!(assert_failure("2++3"),
                     Error::Parse(ParseError::UnexpectedToken { position: 2, .. })));
}

#[test]
fn constant_followed_by_digits_is_a_stray_number() {
    for (src, position) in [("e2", 1), ("pi2", 2), ("2*e3", 3)] {
        assert_eq!(assert_failure(src),
                   Error::Parse(ParseError::UnexpectedToken { position,
                                                              token: src[position..].to_string() }));
    }
}

#[test]
fn error_messages_carry_position_and_text() {
    let message = assert_failure("1 + foo").to_string();
    assert_eq!(message, "Error at position 4: Unknown token 'foo'.");

    let message = assert_failure("(1 + 2").to_string();
    assert_eq!(message, "Error at position 0: Parenthesis opened here is never closed.");
}

#[test]
fn depth_limit_is_configurable() {
    let src = format!("{}2{}", "(".repeat(20), ")".repeat(20));
    assert!(evaluate_str(&src, &radians()).is_ok());

    let err = evaluate_str_with(&src, &radians(), ParserConfig { max_depth: 10 }).unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::TooComplex { limit: 10 }));
}
