use std::{cell::RefCell, rc::Rc};

use jpp::{
    interpreter::{
        evaluator::core::{Outcome, Session},
        host::{CapturedOutput, ScriptedInput},
        value::Value,
    },
    run_program,
};

fn assert_output(src: &str, expected: &[&str]) {
    assert_output_with_input(src, &[], expected);
}

fn assert_output_with_input(src: &str, input: &[&str], expected: &[&str]) {
    let (output, outcomes) = run_program(src, input.iter().copied());

    assert_eq!(output, expected, "program:\n{src}");
    if let Some(failed) = outcomes.iter().find(|o| o.is_failure()) {
        panic!("Program failed with {failed:?}:\n{src}");
    }
}

fn assert_failure(src: &str, kind: &str) {
    let (output, outcomes) = run_program(src, std::iter::empty::<String>());

    let Some(Outcome::Failed(e)) = outcomes.iter().find(|o| o.is_failure()) else {
        panic!("Program succeeded but was expected to fail:\n{src}\noutput: {output:?}");
    };
    assert_eq!(e.kind(), kind, "program:\n{src}");
    assert!(output.contains(&e.to_string()),
            "error {e} was not reported to the output");
}

#[test]
fn var_and_print() {
    assert_output("var x = 5\nprint x", &["5"]);
    assert_output("var x = 5\nvar x = 10\nprint x", &["10"]);
    assert_output("var x = 2\nvar y = x * 3\nprint y - x", &["4"]);
    assert_output("var then = 1\nprint then", &["1"]);
}

#[test]
fn printed_forms() {
    assert_output("print 'hello'", &["hello"]);
    assert_output("print \"say 'hi'\"", &["say 'hi'"]);
    assert_output("print [1, 'a', [2]]", &["[1, 'a', [2]]"]);
    assert_output("print 10 / 4", &["2.5"]);
    assert_output("print 1 / 3", &["0.3333333333333333"]);
    assert_output("print 2 ^ 53", &["9007199254740992"]);
    assert_output("print []", &["[]"]);
}

#[test]
fn print_of_nothing_writes_nothing() {
    let (output, outcomes) = run_program("print choice([])\ncalc choice([])", std::iter::empty::<String>());

    assert!(output.is_empty());
    assert_eq!(outcomes, [Outcome::Executed, Outcome::Executed]);
}

#[test]
fn calc_prints_like_print() {
    assert_output("calc 2 + 3 * 4", &["14"]);
    assert_output("calc 'a' + 'b'", &["ab"]);
}

#[test]
fn if_statements() {
    assert_output("if 3 > 2 then print \"yes\"", &["yes"]);
    assert_output("if 3 < 2 then print 'no'", &[]);
    assert_output("if 1 then if 2 > 1 then print 'deep'", &["deep"]);
    assert_output("if 1 then var y = 2\nprint y", &["2"]);
    assert_output("if 'then' == 'then' then print 'ok'", &["ok"]);
    assert_output("var n = 0\nif n then print 'never'\nif n == 0 then print 'zero'", &["zero"]);
}

#[test]
fn false_condition_has_no_side_effects() {
    let output = CapturedOutput::new();
    let mut session = Session::new(ScriptedInput::default(), output.clone());

    assert_eq!(session.execute("if 3 < 2 then var x = 1"), Outcome::Executed);
    assert_eq!(session.environment().get_variable("x"), None);
    assert!(output.lines().is_empty());
}

#[test]
fn if_statement_errors() {
    assert_failure("if x then print 1", "UndefinedVariable");
    assert_failure("if 1 < 2 < 3 then print 1", "ChainedComparison");
    assert_failure("if 1 then print 1 / 0", "DivisionByZero");
    assert_failure("if 1 then bogus", "Unrecognized");
    assert_failure("if 1 $ 2 then print 1", "UnexpectedCharacter");
    assert_failure("if @bob is online", "Unrecognized");
}

#[test]
fn user_defined_functions() {
    assert_output("function sq(n) = n ^ 2\ncalc sq(4)", &["16"]);
    assert_output("function add(a, b) = a + b\nprint add(2, 5)", &["7"]);
    assert_output("function five() = 5\nprint five()", &["5"]);
    assert_output("function double(x) = x * 2\nfunction quad(x) = double(double(x))\nprint quad(3)",
                  &["12"]);
    assert_output("function greet(name) = 'Hello, ' + name\nprint greet('Ada')",
                  &["Hello, Ada"]);
}

#[test]
fn parameters_shadow_globals() {
    assert_output("var n = 100\nfunction f(n) = n + 1\nprint f(1)\nprint n", &["2", "100"]);
    assert_output("var k = 3\nfunction addk(x) = x + k\nprint addk(1)\nvar k = 10\nprint addk(1)",
                  &["4", "11"]);
}

#[test]
fn function_redefinition_overwrites() {
    assert_output("function f(x) = x\nfunction f(x) = x * 2\nprint f(3)", &["6"]);
}

#[test]
fn function_errors() {
    assert_failure("function sq(n) = n ^ 2\ncalc sq(1, 2)", "ArityMismatch");
    assert_failure("calc nope(1)", "UndefinedFunction");
    assert_failure("function sqrt(x) = x", "BuiltinRedefinition");
    assert_failure("function f(a, a) = a", "DuplicateParameter");
    assert_failure("function loop(x) = loop(x)\nprint loop(1)", "RecursionLimit");
    assert_failure("function g(x) = y\nprint g(1)", "UndefinedVariable");
}

#[test]
fn function_bodies_are_parsed_when_called() {
    let (output, outcomes) = run_program("function bad(x) = x +\nprint 1\nprint bad(1)",
                                         std::iter::empty::<String>());

    assert_eq!(outcomes[0], Outcome::Executed);
    assert_eq!(outcomes[1], Outcome::Executed);
    assert!(matches!(&outcomes[2], Outcome::Failed(e) if e.kind() == "UnexpectedEndOfInput"));
    assert_eq!(output[0], "1");
}

#[test]
fn input_statement() {
    assert_output_with_input("input name, 'Name? '\nprint 'Hi ' + name", &["Ada"], &["Hi Ada"]);
    assert_output_with_input("input a\ninput b\nprint b + a", &["x", "y"], &["yx"]);
    assert_output_with_input("var a = input('> ')\nprint a", &["typed"], &["typed"]);
    assert_output_with_input("print input()", &["echo"], &["echo"]);
}

#[test]
fn input_is_always_a_string() {
    let (output, _) = run_program("input n\nprint n + 1", ["5"]);

    assert_eq!(output.len(), 1);
    assert!(output[0].starts_with("[EvalError::TypeMismatch]"));
}

#[test]
fn exhausted_input() {
    assert_failure("input n", "InputUnavailable");
    assert_failure("print input('? ')", "InputUnavailable");
}

#[test]
fn blank_lines_and_comments_are_skipped() {
    let (output, outcomes) = run_program("  \n# hello\n   # indented\n", std::iter::empty::<String>());

    assert!(output.is_empty());
    assert!(outcomes.iter().all(|o| *o == Outcome::Skipped));
}

#[test]
fn unrecognized_lines() {
    let output = CapturedOutput::new();
    let mut session = Session::new(ScriptedInput::default(), output.clone());

    assert!(session.execute("hello world").is_failure());
    assert_eq!(output.lines(),
               ["[DispatchError::Unrecognized] Error: Unknown command - 'hello world'"]);
    assert_eq!(session.environment().variable_count(), 0);
    assert_eq!(session.environment().function_count(), 0);

    assert_failure("print", "Unrecognized");
    assert_failure("var = 1", "Unrecognized");
    assert_failure("printx 1", "Unrecognized");
    assert_failure("x = 1", "Unrecognized");
}

#[test]
fn command_handler_receives_unrecognized_lines() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);

    let output = CapturedOutput::new();
    let mut session =
        Session::new(ScriptedInput::default(), output.clone()).with_command_handler(move |line: &str| {
            recorder.borrow_mut().push(line.to_string());
            line.starts_with("send ")
        });

    assert_eq!(session.execute("  send hello  "), Outcome::Delegated);
    assert_eq!(session.execute("if 1 then   send again"), Outcome::Delegated);
    assert_eq!(session.execute("print 1"), Outcome::Executed);
    assert!(session.execute("receive ").is_failure());

    assert_eq!(*seen.borrow(), ["  send hello  ", "send again", "receive "]);
    assert_eq!(output.lines(),
               ["1", "[DispatchError::Unrecognized] Error: Unknown command - 'receive'"]);
}

#[test]
fn if_lines_without_then_are_commands() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);

    let output = CapturedOutput::new();
    let mut session =
        Session::new(ScriptedInput::default(), output.clone()).with_command_handler(move |line: &str| {
            recorder.borrow_mut().push(line.to_string());
            true
        });

    assert_eq!(session.execute("if it's raining bring umbrella"), Outcome::Delegated);
    assert_eq!(session.execute("if @bob is online"), Outcome::Delegated);

    assert_eq!(*seen.borrow(), ["if it's raining bring umbrella", "if @bob is online"]);
    assert!(output.lines().is_empty());
}

#[test]
fn errors_do_not_stop_the_program() {
    let src = "var x = 1\nvar x = 1 / 0\nprint x\nprint y\nprint 'after'";
    let (output, outcomes) = run_program(src, std::iter::empty::<String>());

    assert_eq!(output,
               ["[EvalError::DivisionByZero] Error at column 11: Division by zero.",
                "1",
                "[EvalError::UndefinedVariable] Error at column 7: Unknown variable 'y'.",
                "after"]);
    assert_eq!(outcomes.iter().filter(|o| o.is_failure()).count(), 2);
}

#[test]
fn deeply_nested_lines_fail_without_stopping_the_program() {
    let nested = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let src = format!("print {nested}\nif {nested} then print 'no'\nprint 'after'");
    let (output, outcomes) = run_program(&src, std::iter::empty::<String>());

    assert!(matches!(&outcomes[0], Outcome::Failed(e) if e.kind() == "NestingLimit"));
    assert!(matches!(&outcomes[1], Outcome::Failed(e) if e.kind() == "NestingLimit"));
    assert_eq!(output.len(), 3);
    assert_eq!(output[2], "after");
}

#[test]
fn error_columns_refer_to_the_whole_line() {
    let (output, _) = run_program("if 1 then print 1/0", std::iter::empty::<String>());

    assert_eq!(output, ["[EvalError::DivisionByZero] Error at column 18: Division by zero."]);
}

#[test]
fn session_api() {
    let mut session = Session::new(ScriptedInput::default(), CapturedOutput::new());

    session.execute("var x = 5");
    assert_eq!(session.evaluate("x"), Ok(Value::Number(5.0)));

    session.environment_mut().set_variable("y", Value::from("set by host"));
    assert_eq!(session.evaluate("y + '!'"), Ok(Value::from("set by host!")));

    assert_eq!(session.evaluate_condition("x > 4"), Ok(true));

    let outcomes = session.run("print x\n\nnonsense");
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0], Outcome::Executed);
    assert_eq!(outcomes[1], Outcome::Skipped);
    assert!(outcomes[2].is_failure());
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new(ScriptedInput::default(), CapturedOutput::new());
    let mut second = Session::new(ScriptedInput::default(), CapturedOutput::new());

    first.execute("var x = 1");

    assert!(second.evaluate("x").is_err());
    assert_eq!(first.environment().variable_count(), 1);
}
