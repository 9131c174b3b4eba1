//! Serialization round-trips and path handling on arbitrary input.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use proptest::string::string_regex;
use slnmerge::domain::value_objects::path::{from_sln_location, normalize, to_sln_location};
use slnmerge::{ProjectKey, Solution};

fn segment() -> impl Strategy<Value = String> {
    string_regex("[A-Za-z][A-Za-z0-9_.]{0,8}").expect("valid regex")
}

fn location() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop_oneof![segment(), Just("..".to_string())], 0..4),
        segment(),
    )
        .prop_map(|(dirs, file)| {
            let mut parts = dirs;
            parts.push(format!("{file}.csproj"));
            parts.join("\\")
        })
}

fn guid() -> impl Strategy<Value = String> {
    string_regex("[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}").expect("valid regex")
}

fn solution_text(projects: &[(String, String, String)]) -> String {
    let mut text = String::from(
        "Microsoft Visual Studio Solution File, Format Version 11.00\r\n# Visual Studio 2010\r\n",
    );
    for (name, loc, guid) in projects {
        text.push_str(&format!(
            "Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"{name}\", \"{loc}\", \"{{{guid}}}\"\r\nEndProject\r\n"
        ));
    }
    text.push_str(
        "Global\r\n\tGlobalSection(SolutionProperties) = preSolution\r\n\t\tHideSolutionNode = FALSE\r\n\tEndGlobalSection\r\nEndGlobal\r\n",
    );
    text
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    /// Parsing the serialized merge gives back the same identities and names.
    #[test]
    fn serialized_merge_parses_back(
        projects in prop::collection::vec((segment(), location(), guid()), 0..6)
    ) {
        let path = PathBuf::from("/work/repo/In.sln");
        let input = Solution::from_text(&path, solution_text(&projects)).expect("input parses");
        let merged = Solution::merge_solutions("Out", Path::new("/work/repo"), &[&input])
            .expect("merge succeeds")
            .solution;

        let text = merged.serialize();
        prop_assert!(!text.replace("\r\n", "").contains('\n'));

        let reparsed = Solution::from_text(&merged.path(), text.clone()).expect("output parses");
        let before: Vec<(ProjectKey, String)> = merged
            .projects()
            .iter()
            .map(|p| (p.key(), p.name().to_string()))
            .collect();
        let after: Vec<(ProjectKey, String)> = reparsed
            .projects()
            .iter()
            .map(|p| (p.key(), p.name().to_string()))
            .collect();
        prop_assert_eq!(before, after);
    }

    /// Arbitrary text never panics the parser.
    #[test]
    fn from_text_never_panics(text in ".{0,400}") {
        let _ = Solution::from_text(Path::new("/work/Fuzz.sln"), text);
    }

    /// Normalizing is idempotent.
    #[test]
    fn normalize_is_idempotent(loc in location()) {
        let once = normalize(&Path::new("/work/a/b").join(from_sln_location(&loc)));
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Relative locations without `..` survive the path conversions.
    #[test]
    fn sln_location_round_trips(parts in prop::collection::vec(segment(), 1..5)) {
        let loc = parts.join("\\");
        prop_assert_eq!(to_sln_location(&from_sln_location(&loc)), loc);
    }
}
