//! Build wrapper discovery
//!
//! Micronaut projects check in a Gradle wrapper (`gradlew`) or a Maven
//! wrapper (`mvnw`). [`locate`] walks the workspace for either script and
//! prefers Gradle when both are present.

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Build tool behind a located wrapper script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Gradle,
    Maven,
}

impl WrapperKind {
    /// Platform-appropriate wrapper script name.
    pub fn script_name(self) -> &'static str {
        match self {
            WrapperKind::Gradle => {
                if cfg!(windows) {
                    "gradlew.bat"
                } else {
                    "gradlew"
                }
            }
            WrapperKind::Maven => {
                if cfg!(windows) {
                    "mvnw.bat"
                } else {
                    "mvnw"
                }
            }
        }
    }
}

/// A located wrapper script and the project directory containing it.
///
/// Handles are resolved fresh for every command; nothing is cached across
/// invocations, so a moved or deleted wrapper is picked up next time.
#[derive(Debug, Clone)]
pub struct WrapperHandle {
    pub kind: WrapperKind,
    pub script: PathBuf,
    pub project_dir: PathBuf,
}

/// Searches `workspace` for a build wrapper script.
///
/// Gradle takes priority over Maven. Dependency caches (`node_modules`) are
/// skipped. Returns `None` when neither wrapper is checked in; that is a
/// normal outcome for a project without wrappers, not an error.
pub async fn locate(workspace: &Path) -> Option<WrapperHandle> {
    for kind in [WrapperKind::Gradle, WrapperKind::Maven] {
        if let Some(handle) = find_script(workspace, kind) {
            debug!(kind = ?handle.kind, script = %handle.script.display(), "wrapper located");
            return Some(handle);
        }
    }
    debug!(workspace = %workspace.display(), "no build wrapper found");
    None
}

fn find_script(workspace: &Path, kind: WrapperKind) -> Option<WrapperHandle> {
    let script_name = kind.script_name();

    let mut overrides = OverrideBuilder::new(workspace);
    // A leading `!` makes the glob an exclusion.
    overrides.add("!**/node_modules/**").ok()?;

    let mut matches: Vec<PathBuf> = WalkBuilder::new(workspace)
        .standard_filters(false)
        .overrides(overrides.build().ok()?)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.into_path())
        .filter(|path| path.file_name().map(|n| n == script_name).unwrap_or(false))
        .collect();

    // Deterministic "first match" regardless of walk order.
    matches.sort();
    let script = matches.into_iter().next()?;
    let project_dir = script.parent().unwrap_or(workspace).to_path_buf();
    Some(WrapperHandle {
        kind,
        script,
        project_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "#!/bin/sh\n").expect("Failed to write wrapper script");
    }

    #[tokio::test]
    async fn test_locate_gradle_wrapper() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), WrapperKind::Gradle.script_name());

        let handle = locate(dir.path()).await.expect("wrapper should be found");
        assert_eq!(handle.kind, WrapperKind::Gradle);
        assert_eq!(handle.project_dir, dir.path());
    }

    #[tokio::test]
    async fn test_gradle_takes_priority_over_maven() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), WrapperKind::Maven.script_name());
        touch(dir.path(), WrapperKind::Gradle.script_name());

        let handle = locate(dir.path()).await.expect("wrapper should be found");
        assert_eq!(handle.kind, WrapperKind::Gradle);
    }

    #[tokio::test]
    async fn test_locate_maven_wrapper_in_subdirectory() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("service");
        fs::create_dir_all(&sub).unwrap();
        touch(&sub, WrapperKind::Maven.script_name());

        let handle = locate(dir.path()).await.expect("wrapper should be found");
        assert_eq!(handle.kind, WrapperKind::Maven);
        assert_eq!(handle.project_dir, sub);
    }

    #[tokio::test]
    async fn test_node_modules_is_excluded() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("node_modules").join("some-pkg");
        fs::create_dir_all(&cache).unwrap();
        touch(&cache, WrapperKind::Gradle.script_name());

        assert!(locate(dir.path()).await.is_none());
    }

    #[tokio::test]
    async fn test_no_wrapper_is_a_normal_outcome() {
        let dir = TempDir::new().unwrap();
        assert!(locate(dir.path()).await.is_none());
    }
}
