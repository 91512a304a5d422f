use std::fs;

use treelox::{
    Lox, Outcome,
    diagnostics::Capture,
    interpreter::{
        lexer::Lexer,
        parser::core::Parser,
        token::{Literal, TokenKind},
        value::Value,
    },
};
use walkdir::WalkDir;

/// What a fixture script says should happen when it runs.
#[derive(Debug, Default)]
struct Expectation {
    output:        Vec<String>,
    runtime_error: Option<String>,
    static_error:  bool,
}

fn parse_expectations(source: &str) -> Expectation {
    let mut expectation = Expectation::default();

    for line in source.lines() {
        if let Some((_, rest)) = line.split_once("// expect runtime error: ") {
            expectation.runtime_error = Some(rest.trim().to_string());
        } else if let Some((_, rest)) = line.split_once("// expect: ") {
            expectation.output.push(rest.trim().to_string());
        } else if line.contains("// expect error") {
            expectation.static_error = true;
        }
    }

    expectation
}

fn run(source: &str) -> (Outcome, Capture) {
    let mut capture = Capture::default();
    let outcome = Lox::new().run(source, &mut capture);
    (outcome, capture)
}

#[test]
fn script_fixtures_behave_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = parse_expectations(&source);
        let (outcome, capture) = run(&source);
        count += 1;

        assert_eq!(capture.output, expected.output, "printed output of {path:?}");
        assert_eq!(outcome.had_error, expected.static_error, "static errors of {path:?}: {:?}",
                   capture.errors);
        assert_eq!(outcome.had_runtime_error,
                   expected.runtime_error.is_some(),
                   "runtime errors of {path:?}: {:?}",
                   capture.errors);

        if let Some(message) = expected.runtime_error {
            assert_eq!(capture.errors.len(), 1, "{path:?}");
            assert!(capture.errors[0].starts_with(&message),
                    "{path:?}: expected {message:?}, got {:?}",
                    capture.errors[0]);
        }
        if expected.static_error {
            assert!(!capture.errors.is_empty(), "{path:?}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_prints(src: &str, expected: &[&str]) {
    let (outcome, capture) = run(src);
    assert!(outcome.is_success(), "Script failed: {:?}", capture.errors);
    assert_eq!(capture.output, expected);
}

fn assert_runtime_error(src: &str, report: &str) {
    let (outcome, capture) = run(src);
    assert!(outcome.had_runtime_error, "Script succeeded but was expected to fail");
    assert_eq!(capture.errors, vec![report]);
}

#[test]
fn numeric_literals_scan_to_a_single_token() {
    for n in ["0", "7", "42", "1.5", "3.25", "100.001", "9007199254740991"] {
        let mut capture = Capture::default();
        let tokens = Lexer::new(n, &mut capture).scan_tokens().tokens;

        assert_eq!(tokens.len(), 2, "{n}");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal, n.parse().ok().map(Literal::Number));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}

#[test]
fn addition_parses_and_evaluates() {
    let mut capture = Capture::default();
    let tokens = Lexer::new("1 + 2", &mut capture).scan_tokens().tokens;
    let expr = Parser::new(&tokens, &mut capture).parse_expression()
                                                 .expect("parse failed");

    assert_eq!(expr.to_string(), "(+ 1 2)");
    assert_eq!(Lox::new().interpreter_mut().evaluate(&expr), Ok(Value::Number(3.0)));
}

#[test]
fn plus_operand_asymmetry() {
    assert_prints("print \"a\" + 1;", &["a1"]);
    assert_runtime_error("print 1 + \"a\";",
                         "Operands must be two numbers or two strings.\n[line 1]");
    assert_runtime_error("\n\nprint true + 1;",
                         "Operands must be two numbers or two strings.\n[line 3]");
}

#[test]
fn rendering_of_printed_values() {
    assert_prints("print 5.0; print 5.5; print nil;", &["5", "5.5", "nil"]);
}

#[test]
fn undefined_assignment_names_the_variable() {
    assert_runtime_error("x = 1;", "Undefined variable 'x'.\n[line 1]");
}

#[test]
fn short_circuit_skips_right_operand() {
    assert_prints("print false and missing; print true or missing;", &["false", "true"]);
}

#[test]
fn runtime_error_aborts_the_rest_of_the_run() {
    let (outcome, capture) = run("print 1;\nprint -nil;\nprint 3;");
    assert_eq!(outcome,
               Outcome { had_error:         false,
                         had_runtime_error: true, });
    assert_eq!(capture.output, vec!["1"]);
    assert_eq!(capture.errors, vec!["Operand must be a number.\n[line 2]"]);
}

#[test]
fn static_errors_prevent_execution() {
    let (outcome, capture) = run("print 1;\nprint 2\nprint 3;");
    assert!(outcome.had_error);
    assert!(!outcome.had_runtime_error);
    assert!(capture.output.is_empty());
    assert_eq!(capture.errors, vec!["[line 3] Error at 'print': Expect ';' after value."]);
}

#[test]
fn lexical_and_syntax_errors_are_collected_together() {
    let (outcome, capture) = run("print #;\nprint \"open");
    assert!(outcome.had_error);
    assert_eq!(capture.errors,
               vec!["[line 1] Error: Unexpected character.",
                    "[line 2] Error: Unterminated string.",
                    "[line 1] Error at ';': Expect expression.",
                    "[line 2] Error at end: Expect expression."]);
}

#[test]
fn session_keeps_globals_between_runs() {
    let mut lox = Lox::new();
    let mut capture = Capture::default();

    assert!(lox.run("var count = 1;", &mut capture).is_success());
    assert!(lox.run("count = count + 1;", &mut capture).is_success());
    assert!(lox.run("print undefined_thing;", &mut capture).had_runtime_error);
    assert!(lox.run("print count;", &mut capture).is_success());

    assert_eq!(capture.output, vec!["2"]);
}

#[test]
fn failed_block_leaves_only_the_global_scope() {
    let mut lox = Lox::new();
    let mut capture = Capture::default();

    let outcome = lox.run("{ var inner = 1; { print -\"x\"; } }", &mut capture);
    assert!(outcome.had_runtime_error);
    assert_eq!(lox.interpreter_mut().environment().depth(), 1);

    let outcome = lox.run("print inner;", &mut capture);
    assert!(outcome.had_runtime_error);
    assert_eq!(capture.errors[1], "Undefined variable 'inner'.\n[line 1]");
}

#[test]
fn host_defined_globals_can_be_assigned() {
    let mut lox = Lox::new();
    let mut capture = Capture::default();
    lox.interpreter_mut().define_global("x", Value::Nil);

    let outcome = lox.run("print x; x = 1; print x;", &mut capture);

    assert!(outcome.is_success());
    assert_eq!(capture.output, vec!["nil", "1"]);
}

#[test]
fn deeply_nested_programs_fail_to_parse_instead_of_crashing() {
    let sum = format!("print 1{};", " + 1".repeat(200_000));
    let (outcome, capture) = run(&sum);
    assert!(outcome.had_error);
    assert!(!outcome.had_runtime_error);
    assert_eq!(capture.errors, vec!["[line 1] Error at '+': Expression nesting too deep."]);

    let groups = format!("print {}1;", "(".repeat(50_000));
    let (outcome, capture) = run(&groups);
    assert!(outcome.had_error);
    assert_eq!(capture.errors[0], "[line 1] Error at '(': Expression nesting too deep.");
}

#[test]
fn long_chains_within_the_limit_run() {
    assert_prints(&format!("print 1{};", " + 1".repeat(100)), &["101"]);
    assert_prints(&format!("print {}2;", "-".repeat(100)), &["2"]);
}

#[test]
fn relexing_and_reparsing_are_idempotent() {
    let source = "var a = 1;\n{ a = a * (2 + -3) or nil; }\nprint a == 1;";
    let first = Lox::parse(source, &mut Capture::default());
    let second = Lox::parse(source, &mut Capture::default());

    assert!(first.is_clean());
    assert_eq!(first, second);
    assert_eq!(Lox::tokens(source, &mut Capture::default()),
               Lox::tokens(source, &mut Capture::default()));
}
