//! Integration tests for `slnmerge check`

mod common;

use common::*;

#[test]
fn check_clean_inputs() {
    let env = TestEnv::new();
    env.write("A.sln", &solution_text(&[("App", "App\\App.csproj", GUID_APP)]));
    env.write(
        "B.sln",
        &solution_text(&[
            ("App", "App\\App.csproj", GUID_APP),
            ("Lib", "Lib\\Lib.csproj", GUID_LIB),
        ]),
    );

    let result = env.run(&["check", "A.sln", "B.sln"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("A: 1 project(s)"));
    assert!(result.stdout.contains("B: 2 project(s)"));
    assert!(result.stdout.contains("No identity conflicts"));
}

#[test]
fn check_conflicts_do_not_fail_the_command() {
    let env = TestEnv::new();
    env.write("A.sln", &solution_text(&[("App", "App\\App.csproj", GUID_APP)]));
    env.write("B.sln", &solution_text(&[("App", "Legacy\\App.csproj", GUID_APP)]));

    let result = env.run(&["check", "A.sln", "B.sln"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("1 identity conflict(s)"));
    assert!(result.stdout.contains(&format!("Project guid {{{GUID_APP}}}")));
    assert!(!env.path("A.sln").with_file_name("All.sln").exists());
}

#[test]
fn check_json_emits_conflict_events() {
    let env = TestEnv::new();
    env.write("A.sln", &solution_text(&[("App", "App\\App.csproj", GUID_APP)]));
    env.write("B.sln", &solution_text(&[("App", "Legacy\\App.csproj", GUID_APP)]));

    let result = env.run(&["check", "A.sln", "B.sln", "--json"]);
    assert!(result.success);

    let events = result.events();
    let conflict = events
        .iter()
        .find(|e| e["event"] == "conflict")
        .expect("conflict event");
    assert_eq!(conflict["guid"], GUID_APP);
    assert_eq!(conflict["occurrences"].as_array().map(Vec::len), Some(2));
    assert_eq!(conflict["occurrences"][0]["solution"], "A");

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["conflicts"], 1);
}

#[test]
fn check_parse_failure_exits_nonzero() {
    let env = TestEnv::new();
    env.write("A.sln", &format!("{HEADER}Global\r\n\tGlobalSection(X) = preSolution\r\n"));

    let result = env.run(&["check", "A.sln"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("check failed"), "{}", result.stderr);
}
