//! Tests for the command-line configuration surface.

use std::path::PathBuf;

use ticksched::config::Config;
use ticksched::policy::Discipline;
use ticksched::SimError;

fn parse(args: &[&str]) -> Result<Config, SimError> {
    Config::parse(args.iter().map(|s| s.to_string()))
}

#[test]
fn test_parses_short_flags_and_paths() {
    let cfg = parse(&["-s", "RR", "-q", "2", "in.csv", "out.csv"]).unwrap();
    assert_eq!(cfg.discipline, Discipline::RR);
    assert_eq!(cfg.quantum, Some(2));
    assert_eq!(cfg.input, PathBuf::from("in.csv"));
    assert_eq!(cfg.output, PathBuf::from("out.csv"));
}

#[test]
fn test_parses_long_flags_without_quantum() {
    let cfg = parse(&["--scheduler", "HRRN", "in.csv", "out.csv"]).unwrap();
    assert_eq!(cfg.discipline, Discipline::HRRN);
    assert_eq!(cfg.quantum, None);
}

#[test]
fn test_flags_may_follow_the_paths() {
    let cfg = parse(&["in.csv", "out.csv", "-s", "FB"]).unwrap();
    assert_eq!(cfg.discipline, Discipline::FB);
    assert_eq!(cfg.input, PathBuf::from("in.csv"));
}

#[test]
fn test_rejects_unknown_scheduler_type() {
    assert_eq!(
        parse(&["-s", "LIFO", "in", "out"]).unwrap_err(),
        SimError::UnknownDiscipline("LIFO".to_string())
    );
}

#[test]
fn test_rejects_malformed_quantum() {
    assert_eq!(
        parse(&["-s", "RR", "-q", "two", "in", "out"]).unwrap_err(),
        SimError::InvalidQuantum("two".to_string())
    );
}

#[test]
fn test_rejects_dangling_option() {
    assert_eq!(
        parse(&["in", "out", "-q"]).unwrap_err(),
        SimError::MissingOptionValue("--quantum")
    );
}

#[test]
fn test_rejects_missing_arguments() {
    assert_eq!(
        parse(&["in", "out"]).unwrap_err(),
        SimError::MissingArgument("scheduler type")
    );
    assert_eq!(
        parse(&["-s", "FCFS", "in"]).unwrap_err(),
        SimError::MissingArgument("input path")
    );
    assert_eq!(
        parse(&["-s", "FCFS"]).unwrap_err(),
        SimError::MissingArgument("output path")
    );
}

#[test]
fn test_rejects_extra_arguments() {
    assert_eq!(
        parse(&["-s", "FCFS", "a", "b", "c"]).unwrap_err(),
        SimError::UnexpectedArgument("c".to_string())
    );
    assert_eq!(
        parse(&["-s", "FCFS", "--verbose", "a", "b"]).unwrap_err(),
        SimError::UnexpectedArgument("--verbose".to_string())
    );
}
