//! End-to-end interpreter tests: full programs from source text to
//! final value.

use edec_eval::{Environment, Evaluator, Value};
use edec_par::Parser;

fn eval(source: &str) -> Value {
    let program = Parser::from_source(source).parse();
    assert!(
        program.parse_errors.is_empty(),
        "unexpected parse errors: {:?}",
        program.parse_errors
    );
    Evaluator::new().eval_program(&program, &Environment::new())
}

fn assert_int(source: &str, expected: i64) {
    let result = eval(source);
    assert!(
        result.equals(&Value::Int(expected)),
        "{source} => {result:?}, want {expected}"
    );
}

fn assert_bool(source: &str, expected: bool) {
    let result = eval(source);
    assert!(
        result.equals(&Value::Bool(expected)),
        "{source} => {result:?}, want {expected}"
    );
}

#[test]
fn integer_expressions() {
    for (source, expected) in [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("10--", 9),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ] {
        assert_int(source, expected);
    }
}

#[test]
fn boolean_expressions() {
    for (source, expected) in [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 <= 1", true),
        ("2 >= 3", false),
        ("true == true", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == false", true),
        ("true && false", false),
        ("true || false", true),
    ] {
        assert_bool(source, expected);
    }
}

#[test]
fn if_else_chains() {
    assert_int("if (true) { 10 }", 10);
    assert!(eval("if (false) { 10 }").equals(&Value::Nil));
    assert_int("if (1) { 10 }", 10);
    assert_int("if (1 > 2) { 10 } else if (true) { 15 } else { 20 }", 15);
    assert_int("if (1 > 2) { 10 } else if (false) { 15 } else { 20 }", 20);
    assert_int("if (1 < 2) { 10 } else { 20 }", 10);
}

#[test]
fn return_unwinds_nested_blocks() {
    assert_int("<- 10;", 10);
    assert_int("<- 10; 9;", 10);
    assert_int("9; <- 2 * 5; 9;", 10);
    assert_int("if (10 > 1) { <- 10; }", 10);
    assert_int(
        "if (10 > 1) {\n  if (10 > 2) {\n    <- 10\n  }\n  <- 1\n}",
        10,
    );
    assert_int("let f = func(x) { <- x; x + 10 }; f(10)", 10);
    assert_int("let f = func(x) { let result = x + 10; <- result; <- 10 }; f(10)", 20);
}

#[test]
fn range_and_index() {
    assert_int("let arr = [1..10]; arr[2]", 3);
    assert_int("[1..3][0]", 1);
    assert_int("let arr = [1, 2 * 2, 3 + 3]; arr[2]", 6);
    assert_int("len([1..10])", 10);
    assert_int("len([5..1])", 0);
    assert_int("len([-2..2])", 5);
}

#[test]
fn for_loop_mutates_outer_binding() {
    assert_int("let a = 30; for i = range [1..3] { a = a + i }; a", 36);
}

#[test]
fn block_scoped_let_shadowing() {
    let result = eval("let a = 10.5; for i = range [1..10] { let a = 4; a++ }; a");
    assert!(result.equals(&Value::Float(10.5)), "got {result:?}");
}

#[test]
fn closures_capture_their_environment() {
    assert_int(
        "let newAdder = func(x) { func(y) { x + y } }; let addTwo = newAdder(2); addTwo(2)",
        4,
    );
}

#[test]
fn closures_see_later_updates() {
    assert_int(
        "let counter = 0; let bump = func() { counter = counter + 1; counter }; bump(); bump(); bump()",
        3,
    );
}

#[test]
fn match_recovers_from_errors() {
    let result = eval("let obj = match 10 * \"a\" { case error: return \"fallback\" }; obj");
    assert!(result.equals(&Value::Str("fallback".into())), "got {result:?}");
}

#[test]
fn match_error_and_default_cases() {
    let result = eval("match 10 * \"a\" { case error: \"E\" default: \"D\" }");
    assert!(result.equals(&Value::Str("E".into())));
    let result = eval("match 10 * 2 { case error: \"E\" default: \"D\" }");
    assert!(result.equals(&Value::Str("D".into())));
    let result = eval("match 20 { case error: \"E\" case 20: \"twenty\" default: \"D\" }");
    assert!(result.equals(&Value::Str("twenty".into())));
}

#[test]
fn json_round_trip() {
    assert_bool(
        "import json; let h = {\"a\": 1, \"b\": [1, 2]}; json.parse(json.string(h)) == h",
        true,
    );
}

#[test]
fn out_of_range_index_faults() {
    let result = eval("let a = [1, 2]; a[5]");
    match result {
        Value::Error(message) => {
            assert!(
                message.contains("index 5 out of range with length 2"),
                "got: {message}"
            );
        },
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn error_halts_program() {
    let result = eval("10 * \"a\"; 5");
    assert!(result.is_error());
}

#[test]
fn array_aliasing_is_observable() {
    assert_bool("let a = [1, 2]; let b = a; a.push(3); b == [1, 2, 3]", true);
}

#[test]
fn self_equality_except_functions() {
    assert_bool("let a = [1, {\"k\": 2}]; a.equal(a)", true);
    assert_bool("let h = {\"k\": 2}; h.equal(h)", true);
    assert_bool("let f = func() { 1 }; f.equal(f)", false);
    assert_bool("len.equal(len)", false);
}

#[test]
fn reassign_undeclared_identifier_faults() {
    let result = eval("ghost = 5");
    match result {
        Value::Error(message) => {
            assert!(message.contains("cannot reassign undeclared identifier 'ghost'"));
        },
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn index_reassignment() {
    assert_int("let a = [1, 2, 3]; a[1] = 9; a[1]", 9);
    assert_int("let h = {\"k\": 1}; h[\"k\"] = 7; h[\"k\"]", 7);
    assert_int("let h = {\"k\": 1}; h[\"new\"] = 3; h[\"new\"]", 3);
    assert!(eval("let a = [1]; a[5] = 2").is_error());
}

#[test]
fn hash_index_missing_key_faults() {
    let result = eval("let h = {\"a\": 1}; h[\"b\"]");
    match result {
        Value::Error(message) => {
            assert!(message.contains("invalid index entry 'b'"), "got: {message}");
        },
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn declaration_only_let_binds_nil() {
    assert!(eval("let x; x").equals(&Value::Nil));
}

#[test]
fn comments_are_skipped() {
    assert_int("// leading note\nlet a = 1; // trailing\na", 1);
}

#[test]
fn iife() {
    assert_int("func(x) { x * 2 }(21)", 42);
}

#[test]
fn function_arity_mismatch_faults() {
    let result = eval("let f = func(a, b) { a + b }; f(1)");
    match result {
        Value::Error(message) => {
            assert!(message.contains("expected 2 argument(s), got 1"));
        },
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn string_ops() {
    let result = eval("\"foo\" + \"bar\"");
    assert!(result.equals(&Value::Str("foobar".into())));
    assert_int("len(\"foo\" + \"bar\")", 6);
}

#[test]
fn unknown_import_faults() {
    let result = eval("import nonsense");
    match result {
        Value::Error(message) => {
            assert!(message.contains("unknown module 'nonsense'"));
        },
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn parse_errors_suppress_evaluation() {
    let program = Parser::from_source("let 5 = 3;").parse();
    assert!(!program.parse_errors.is_empty());
    let result = Evaluator::new().eval_program(&program, &Environment::new());
    assert!(result.is_error());
}

#[test]
fn division_by_zero_is_recoverable() {
    let result = eval("match 1 / 0 { case error: \"caught\" default: \"fine\" }");
    assert!(result.equals(&Value::Str("caught".into())));
}

#[test]
fn evaluator_records_halting_errors() {
    let program = Parser::from_source("10 * \"a\"").parse();
    let mut evaluator = Evaluator::new();
    let result = evaluator.eval_program(&program, &Environment::new());
    assert!(result.is_error());
    assert_eq!(evaluator.errors.len(), 1);
}
