use jpp::{
    error::{Error, EvalError, ParseError},
    interpreter::{
        evaluator::{core::Session, function::random::choice},
        host::{CapturedOutput, ScriptedInput},
        parser::core::MAX_NESTING_DEPTH,
        value::Value,
    },
};

fn session() -> Session {
    Session::new(ScriptedInput::default(), CapturedOutput::new()).with_seed(42)
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match session().evaluate(src) {
        Ok(value) => assert_eq!(value, expected.into(), "expression: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: &str) {
    match session().evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "expression: {src}, error: {e}"),
    }
}

fn assert_condition(src: &str, expected: bool) {
    match session().evaluate_condition(src) {
        Ok(value) => assert_eq!(value, expected, "condition: {src}"),
        Err(e) => panic!("Condition {src:?} failed: {e}"),
    }
}

fn list(items: Vec<Value>) -> Value {
    Value::from(items)
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("2 ^ -1", 0.5);
    assert_value("-2 ^ 2", -4.0);
    assert_value("--3", 3.0);
    assert_value(".5 + 1", 1.5);
    assert_value("7 / 2", 3.5);
}

#[test]
fn modulo_is_floored() {
    assert_value("7 % 3", 1.0);
    assert_value("-7 % 3", 2.0);
    assert_value("7 % -3", -2.0);
    assert_value("7.5 % 2", 1.5);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("1 / 0", "DivisionByZero");
    assert_failure("5 % 0", "DivisionByZero");
    assert_failure("1 / (2 - 2)", "DivisionByZero");
    assert_failure("0 ^ -1", "DivisionByZero");
}

#[test]
fn power_of_negative_base() {
    assert_value("(-2) ^ 3", -8.0);
    assert_value("4 ^ 0.5", 2.0);
    assert_failure("(-8) ^ 0.5", "DomainError");
}

#[test]
fn string_concatenation() {
    assert_value("'ab' + \"cd\"", "abcd");
    assert_value("'' + ''", "");
    assert_failure("'a' + 1", "TypeMismatch");
    assert_failure("'a' * 2", "TypeMismatch");
    assert_failure("-'a'", "TypeMismatch");
}

#[test]
fn list_literals_keep_their_structure() {
    assert_value("[1, 2, [3, 4]]",
                 list(vec![1.0.into(), 2.0.into(), list(vec![3.0.into(), 4.0.into()])]));
    assert_value("[-1, 'x']", list(vec![(-1.0).into(), "x".into()]));
    assert_value("[1, 1]", list(vec![1.0.into(), 1.0.into()]));
    assert_value("[]", list(Vec::new()));
    assert_value("[1] + [2, 3]", list(vec![1.0.into(), 2.0.into(), 3.0.into()]));
}

#[test]
fn list_literals_accept_only_literals() {
    assert_failure("[1 + 2]", "UnexpectedToken");
    assert_failure("[x]", "UnexpectedToken");
    assert_failure("[sqrt(4)]", "UnexpectedToken");
    assert_failure("[1, 2", "UnexpectedEndOfInput");
}

#[test]
fn math_builtins() {
    assert_value("sqrt(16)", 4.0);
    assert_value("abs(-3)", 3.0);
    assert_value("floor(2.7)", 2.0);
    assert_value("ceil(2.1)", 3.0);
    assert_value("round(2.5)", 2.0);
    assert_value("round(3.5)", 4.0);
    assert_value("round(3.14159, 2)", 3.14);
    assert_value("log(100, 10)", 2.0);
    assert_value("exp(0)", 1.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("sqrt(9) + abs(-1) * 2", 5.0);
}

#[test]
fn builtin_domain_errors() {
    assert_failure("sqrt(-1)", "DomainError");
    assert_failure("log(0)", "DomainError");
    assert_failure("log(-1)", "DomainError");
    assert_failure("log(8, 1)", "DomainError");
    assert_failure("log(8, 0)", "DomainError");
    assert_failure("round(1.5, 0.5)", "DomainError");
    assert_failure("randint(5, 1)", "DomainError");
    assert_failure("randint(1.5, 3)", "DomainError");
}

#[test]
fn builtin_arity_and_types() {
    assert_failure("sqrt()", "ArityMismatch");
    assert_failure("sqrt(1, 2)", "ArityMismatch");
    assert_failure("random(1)", "ArityMismatch");
    assert_failure("log(1, 2, 3)", "ArityMismatch");
    assert_failure("sqrt('x')", "TypeMismatch");
    assert_failure("choice(5)", "TypeMismatch");
}

#[test]
fn choice_called_directly_without_arguments() {
    let err = choice(&mut session(), &[], 3).unwrap_err();

    assert_eq!(err,
               Error::Eval(EvalError::ArityMismatch { name:     "choice".to_string(),
                                                      expected: "1".to_string(),
                                                      found:    0,
                                                      offset:   3, }));
}

#[test]
fn random_builtins() {
    let mut session = session();

    for _ in 0..50 {
        let Ok(Value::Number(r)) = session.evaluate("random()") else {
            panic!("random() must return a number");
        };
        assert!((0.0..1.0).contains(&r));

        let Ok(Value::Number(n)) = session.evaluate("randint(-3, 3)") else {
            panic!("randint() must return a number");
        };
        assert!((-3.0..=3.0).contains(&n) && n.fract() == 0.0);
    }

    assert_value("randint(4, 4)", 4.0);
    assert_value("choice([7])", 7.0);
    assert_value("choice('z')", "z");
    assert_value("choice([])", Value::Nothing);
}

#[test]
fn seeded_sessions_repeat() {
    let draw = || {
        let mut session = session();
        (0..5).map(|_| session.evaluate("randint(1, 1000)"))
              .collect::<Vec<_>>()
    };

    assert_eq!(draw(), draw());
}

#[test]
fn now_returns_a_timestamp() {
    let Ok(Value::Str(stamp)) = session().evaluate("now()") else {
        panic!("now() must return a string");
    };

    let bytes = stamp.as_bytes();
    assert_eq!(bytes.len(), 19);
    assert_eq!(bytes[4], b'-');
    assert_eq!(bytes[10], b' ');
    assert_eq!(bytes[13], b':');
}

#[test]
fn undefined_names() {
    assert_failure("y + 1", "UndefinedVariable");
    assert_failure("nope(1)", "UndefinedFunction");

    let err = session().evaluate("1 + y").unwrap_err();
    assert_eq!(err,
               Error::Eval(EvalError::UndefinedVariable { name:   "y".to_string(),
                                                          offset: 4, }));
}

#[test]
fn lexing_errors() {
    assert_failure("'abc", "UnterminatedString");
    assert_failure("\"abc' + 1", "UnterminatedString");
    assert_failure("1 $ 2", "UnexpectedCharacter");
}

#[test]
fn parsing_errors() {
    assert_failure("1 +", "UnexpectedEndOfInput");
    assert_failure("(1 + 2", "UnexpectedEndOfInput");
    assert_failure("1 2", "TrailingInput");
    assert_failure(")", "UnexpectedToken");
    assert_failure("1 < 2", "TrailingInput");

    let err = session().evaluate("2 * * 3").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { offset: 4, .. })));
}

#[test]
fn nesting_depth_is_bounded() {
    let nested = |open: &str, inner: &str, close: &str| {
        format!("{}{inner}{}", open.repeat(5000), close.repeat(5000))
    };

    assert_failure(&nested("(", "1", ")"), "NestingLimit");
    assert_failure(&nested("[", "1", "]"), "NestingLimit");
    assert_failure(&nested("abs(", "1", ")"), "NestingLimit");
    assert_failure(&nested("-", "1", ""), "NestingLimit");
    assert_failure(&nested("", "2", " ^ 2"), "NestingLimit");
    assert_failure(&nested("", "1", " + 1"), "NestingLimit");

    let err = session().evaluate(&nested("(", "1", ")")).unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::NestingLimit { offset: MAX_NESTING_DEPTH }));
}

#[test]
fn moderate_nesting_still_parses() {
    let depth = 200;

    assert_value(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), 1.0);
    assert_value(&format!("{}1", "--".repeat(depth / 2)), 1.0);
    assert_value(&format!("1{}", " + 1".repeat(depth)), 201.0);
}

#[test]
fn conditions() {
    assert_condition("3 > 2", true);
    assert_condition("3 < 2", false);
    assert_condition("2 <= 2", true);
    assert_condition("3 >= 4", false);
    assert_condition("1 == 1.0", true);
    assert_condition("1 != 2", true);
    assert_condition("'a' < 'b'", true);
    assert_condition("[1, [2]] == [1, [2]]", true);
    assert_condition("1 == '1'", false);
    assert_condition("2 + 2 == 4", true);
}

#[test]
fn conditions_without_comparison_use_truthiness() {
    assert_condition("0", false);
    assert_condition("0.5", true);
    assert_condition("''", false);
    assert_condition("'x'", true);
    assert_condition("[]", false);
    assert_condition("[0]", true);
    assert_condition("choice([])", false);
}

#[test]
fn conditions_reject_chains_and_bad_orderings() {
    let err = session().evaluate_condition("1 < 2 < 3").unwrap_err();
    assert_eq!(err, Error::Parse(ParseError::ChainedComparison { offset: 6 }));

    let err = session().evaluate_condition("1 < 'a'").unwrap_err();
    assert_eq!(err.kind(), "TypeMismatch");
}
