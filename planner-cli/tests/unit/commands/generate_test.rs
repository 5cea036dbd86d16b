use super::*;
use planner_cli::text::event::EventProblem;
use std::io::BufReader;

fn generate_to_file(params: &[&str]) -> tempfile::NamedTempFile {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = [&["generate"][..], params, &["--out-result", tmpfile.path().to_str().unwrap()][..]].concat();
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    run_generate(&matches).unwrap();

    tmpfile
}

#[test]
fn can_generate_event_from_args() {
    let tmpfile = generate_to_file(&["--activities", "25", "--max-time", "40", "--max-budget", "300", "--seed", "7"]);

    let event = BufReader::new(tmpfile.reopen().unwrap()).read_event().unwrap();

    assert_eq!(event.size(), 25);
    assert_eq!(event.max_time, 40);
    assert_eq!(event.max_budget, 300);
    assert_eq!(event.activities[0].name, "Activity-1");
    assert_eq!(event.activities[24].name, "Activity-25");
}

#[test]
fn can_generate_same_event_with_same_seed() {
    let params = ["-n", "10", "-t", "20", "-b", "100", "--seed", "42"];
    let first = generate_to_file(&params);
    let second = generate_to_file(&params);

    let first = std::fs::read_to_string(first.path()).unwrap();
    let second = std::fs::read_to_string(second.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn can_require_generate_args() {
    get_generate_app().try_get_matches_from(vec!["generate", "--activities", "10", "--max-time", "5"]).unwrap_err();
}

#[test]
fn can_reject_invalid_generate_args() {
    for params in [["-n", "0", "-t", "5", "-b", "5"], ["-n", "ten", "-t", "5", "-b", "5"]] {
        let args = [&["generate"][..], &params[..]].concat();
        let matches = get_generate_app().try_get_matches_from(args).unwrap();

        assert!(run_generate(&matches).is_err());
    }
}
