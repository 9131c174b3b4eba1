//! Merge invariants over random sets of solutions.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use slnmerge::{ProjectKey, Solution};

const CSHARP: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";

/// Small pools so random inputs collide often
const GUIDS: &[&str] = &[
    "11111111-1111-1111-1111-111111111111",
    "22222222-2222-2222-2222-222222222222",
    "33333333-3333-3333-3333-333333333333",
    "44444444-4444-4444-4444-444444444444",
];
const LOCATIONS: &[&str] = &[
    "App\\App.csproj",
    "Lib\\Lib.csproj",
    "src\\Core\\Core.csproj",
    "Tools.csproj",
];

fn target() -> PathBuf {
    PathBuf::from("/work/all")
}

fn solution_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..GUIDS.len(), 0..LOCATIONS.len()), 0..6)
}

fn build(index: usize, entries: &[(usize, usize)]) -> Solution {
    let mut text = String::from(
        "Microsoft Visual Studio Solution File, Format Version 11.00\r\n# Visual Studio 2010\r\n",
    );
    for (g, l) in entries {
        text.push_str(&format!(
            "Project(\"{{{CSHARP}}}\") = \"P{g}\", \"{}\", \"{{{}}}\"\r\nEndProject\r\n",
            LOCATIONS[*l], GUIDS[*g]
        ));
    }
    text.push_str("Global\r\nEndGlobal\r\n");
    let path = target().join(format!("S{index}.sln"));
    Solution::from_text(&path, text).expect("generated solution parses")
}

fn inputs_strategy() -> impl Strategy<Value = Vec<Vec<(usize, usize)>>> {
    prop::collection::vec(solution_strategy(), 1..4)
}

fn merge(inputs: &[Vec<(usize, usize)>]) -> (Vec<Solution>, slnmerge::MergeResult) {
    let solutions: Vec<Solution> = inputs
        .iter()
        .enumerate()
        .map(|(i, entries)| build(i, entries))
        .collect();
    let refs: Vec<&Solution> = solutions.iter().collect();
    let merged = Solution::merge_solutions("All", Path::new("/work/all"), &refs)
        .expect("merge of parsed solutions succeeds");
    (solutions, merged)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    /// Merged projects are exactly the distinct identities of the inputs.
    #[test]
    fn merged_identities_are_union_without_duplicates(inputs in inputs_strategy()) {
        let (solutions, merged) = merge(&inputs);

        let keys: Vec<ProjectKey> = merged.solution.projects().iter().map(|p| p.key()).collect();
        let unique: HashSet<&ProjectKey> = keys.iter().collect();
        prop_assert_eq!(unique.len(), keys.len());

        let expected: HashSet<ProjectKey> = solutions
            .iter()
            .flat_map(|s| s.projects().iter().map(|p| p.key()))
            .collect();
        prop_assert_eq!(unique.len(), expected.len());
        for key in &keys {
            prop_assert!(expected.contains(key));
        }
    }

    /// Survivors keep first-seen order across inputs.
    #[test]
    fn merge_preserves_first_seen_order(inputs in inputs_strategy()) {
        let (solutions, merged) = merge(&inputs);

        let mut first_seen: Vec<ProjectKey> = Vec::new();
        for project in solutions.iter().flat_map(|s| s.projects()) {
            let key = project.key();
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        let keys: Vec<ProjectKey> = merged.solution.projects().iter().map(|p| p.key()).collect();
        prop_assert_eq!(keys, first_seen);
    }

    /// Every merged project belongs to the merged solution.
    #[test]
    fn merged_projects_are_owned_by_result(inputs in inputs_strategy()) {
        let (_, merged) = merge(&inputs);
        let id = merged.solution.id();
        for project in merged.solution.projects() {
            prop_assert_eq!(project.owner(), id);
        }
    }

    /// A conflict is reported exactly for guids seen at two or more locations.
    #[test]
    fn conflicts_match_guids_with_several_locations(inputs in inputs_strategy()) {
        let (solutions, merged) = merge(&inputs);

        let mut expected: Vec<String> = Vec::new();
        for guid in GUIDS {
            let locations: HashSet<String> = solutions
                .iter()
                .flat_map(|s| s.projects())
                .filter(|p| p.guid().to_string() == format!("{{{guid}}}"))
                .map(|p| p.key().location().to_string())
                .collect();
            if locations.len() > 1 {
                expected.push(format!("{{{guid}}}"));
            }
        }

        let mut reported: Vec<String> = merged.conflicts.iter().map(|c| c.guid.to_string()).collect();
        reported.sort();
        prop_assert_eq!(reported, expected);
        prop_assert_eq!(merged.warnings.is_empty(), merged.conflicts.is_empty());
    }
}
