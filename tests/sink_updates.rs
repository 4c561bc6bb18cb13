use std::error::Error;
use std::fs;

use pipeorder::sink::{PrioritySink, SinkOutcome, SourceFileSink};

type TestResult = Result<(), Box<dyn Error>>;

const DEFINITION: &str = "\
#include \"common.h\"

void init(module_t *module)
{
  module->params = NULL;
  module->priority = 123;
  module->enabled = 1;
}
";

#[test]
fn rewrites_only_the_priority_field() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("sharpen.c"), DEFINITION)?;

    let mut sink = SourceFileSink::new(dir.path())?;
    let outcome = sink.update_priority("sharpen", 500)?;
    assert_eq!(outcome, SinkOutcome::Updated);

    let rewritten = fs::read_to_string(dir.path().join("sharpen.c"))?;
    assert!(rewritten.contains(
        "  module->priority = 500; // stage order computed by pipeorder, do not edit!"
    ));
    assert!(!rewritten.contains("module->priority = 123"));

    // Every other line is untouched.
    assert!(rewritten.contains("#include \"common.h\""));
    assert!(rewritten.contains("  module->params = NULL;"));
    assert!(rewritten.contains("  module->enabled = 1;"));

    Ok(())
}

#[test]
fn updating_twice_replaces_the_generated_line() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("grain.c"), DEFINITION)?;

    let mut sink = SourceFileSink::new(dir.path())?;
    sink.update_priority("grain", 700)?;
    sink.update_priority("grain", 350)?;

    let rewritten = fs::read_to_string(dir.path().join("grain.c"))?;
    assert!(rewritten.contains("module->priority = 350;"));
    assert!(!rewritten.contains("module->priority = 700;"));
    assert_eq!(rewritten.matches("module->priority").count(), 1);

    Ok(())
}

#[test]
fn missing_definition_is_not_found_not_an_error() -> TestResult {
    let dir = tempfile::tempdir()?;

    let mut sink = SourceFileSink::new(dir.path())?;
    let outcome = sink.update_priority("rawspeed", 1000)?;
    assert_eq!(outcome, SinkOutcome::NotFound);

    Ok(())
}

#[test]
fn falls_back_to_cc_extension() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("demosaic.cc"), DEFINITION)?;

    let mut sink = SourceFileSink::new(dir.path())?;
    assert_eq!(sink.update_priority("demosaic", 900)?, SinkOutcome::Updated);

    let rewritten = fs::read_to_string(dir.path().join("demosaic.cc"))?;
    assert!(rewritten.contains("module->priority = 900;"));

    Ok(())
}

#[test]
fn c_file_wins_over_cc_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("lens.c"), DEFINITION)?;
    fs::write(dir.path().join("lens.cc"), DEFINITION)?;

    let mut sink = SourceFileSink::new(dir.path())?;
    sink.update_priority("lens", 42)?;

    let c_file = fs::read_to_string(dir.path().join("lens.c"))?;
    let cc_file = fs::read_to_string(dir.path().join("lens.cc"))?;
    assert!(c_file.contains("module->priority = 42;"));
    assert!(cc_file.contains("module->priority = 123;"));

    Ok(())
}
