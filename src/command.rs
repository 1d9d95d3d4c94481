//! Command synthesis
//!
//! Translates an abstract goal plus a located wrapper into the literal
//! shell command line to run. Gradle task names pass through unchanged;
//! Maven goals are spelled as phase plus `-Dpackaging=` property.

use crate::wrapper::{WrapperHandle, WrapperKind};
use regex::Regex;
use std::sync::OnceLock;

/// Maven spellings for the abstract goal vocabulary. Identifiers not listed
/// here pass through as literal Maven goals.
const MAVEN_GOALS: &[(&str, &str)] = &[
    ("build", "compile"),
    ("nativeImage", "package -Dpackaging=native-image"),
    ("dockerBuild", "package -Dpackaging=docker"),
    ("dockerBuildNative", "package -Dpackaging=docker-native"),
    ("dockerPush", "deploy -Dpackaging=docker"),
    ("dockerPushNative", "deploy -Dpackaging=docker-native"),
];

/// Produces the shell command line for `goal_id` against `wrapper`.
pub fn synthesize(goal_id: &str, wrapper: &WrapperHandle) -> String {
    let script = escape_whitespace(&wrapper.script.to_string_lossy());
    match wrapper.kind {
        WrapperKind::Gradle => format!("{} {} --no-daemon", script, goal_id),
        WrapperKind::Maven => {
            let goal = MAVEN_GOALS
                .iter()
                .find(|(id, _)| *id == goal_id)
                .map(|(_, spelling)| *spelling)
                .unwrap_or(goal_id);
            format!("{} {}", script, goal)
        }
    }
}

/// Backslash-escapes each whitespace run so the path survives shell word
/// splitting.
fn escape_whitespace(path: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let ws = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
    ws.replace_all(path, r"\$0").into_owned()
}
