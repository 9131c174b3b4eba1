//! Solution text fixtures.

/// C# project type
pub const CSHARP: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";

pub const GUID_APP: &str = "11111111-1111-1111-1111-111111111111";
pub const GUID_LIB: &str = "22222222-2222-2222-2222-222222222222";
pub const GUID_TOOLS: &str = "33333333-3333-3333-3333-333333333333";

pub const HEADER: &str =
    "Microsoft Visual Studio Solution File, Format Version 11.00\r\n# Visual Studio 2010\r\n";

/// Standard Debug/Release configuration block
pub const GLOBAL_CONFIGS: &str = "Global\r\n\
    \tGlobalSection(SolutionConfigurationPlatforms) = preSolution\r\n\
    \t\tDebug|Any CPU = Debug|Any CPU\r\n\
    \t\tRelease|Any CPU = Release|Any CPU\r\n\
    \tEndGlobalSection\r\n\
    \tGlobalSection(SolutionProperties) = preSolution\r\n\
    \t\tHideSolutionNode = FALSE\r\n\
    \tEndGlobalSection\r\n\
    EndGlobal\r\n";

/// One C# project entry: `(name, location, guid)` with bare guid
pub fn project_entry(name: &str, location: &str, guid: &str) -> String {
    format!(
        "Project(\"{{{CSHARP}}}\") = \"{name}\", \"{location}\", \"{{{guid}}}\"\r\nEndProject\r\n"
    )
}

/// Full solution text with the given projects and the standard global block
pub fn solution_text(projects: &[(&str, &str, &str)]) -> String {
    let mut text = String::from(HEADER);
    for (name, location, guid) in projects {
        text.push_str(&project_entry(name, location, guid));
    }
    text.push_str(GLOBAL_CONFIGS);
    text
}
