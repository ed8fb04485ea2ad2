use std::fs::{self};

use jpp::run_program;
use walkdir::WalkDir;

#[test]
fn demo_programs_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "jpp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let (output, outcomes) = run_program(&source, std::iter::empty::<String>());

        for (line, outcome) in source.lines().zip(&outcomes) {
            if outcome.is_failure() {
                panic!("Demo {path:?} failed on line {line:?}: {outcome:?}\nOutput:\n{}",
                       output.join("\n"));
            }
        }
        assert!(!output.is_empty(), "Demo {path:?} printed nothing");
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn arithmetic_demo_output() {
    let source = fs::read_to_string("demos/arithmetic.jpp").expect("arithmetic demo exists");
    let (output, _) = run_program(&source, std::iter::empty::<String>());

    assert_eq!(output[..5], ["14", "20", "512", "2", "2.5"]);
    assert_eq!(output[5], "28.27");
}
