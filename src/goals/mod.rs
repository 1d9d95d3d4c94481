//! Goal catalog resolution
//!
//! An abstract goal is a build-tool-agnostic action identifier (`build`,
//! `nativeImage`, `dockerBuild`, ...) with a human-readable description.
//! For Maven projects the catalog is a fixed list understood by the
//! Micronaut parent POM; for Gradle it is discovered by running the
//! wrapper's `tasks` report and parsing it.
//!
//! The catalog is resolved per invocation and passed around by value; there
//! is no process-global catalog that can go stale when the project
//! structure changes.

pub mod parser;

use crate::wrapper::{WrapperHandle, WrapperKind};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::process::Command;
use tracing::{debug, info};

/// Fallback goal identifier when no catalog could be resolved.
pub const DEFAULT_GOAL: &str = "build";

/// Section headers of Gradle's task report.
const GRADLE_BUILD_SECTION: &str = "Build tasks";
const GRADLE_UPLOAD_SECTION: &str = "Upload tasks";

/// An abstract goal identifier and its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub description: String,
}

impl Goal {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Build and deploy goal sequences for one project.
///
/// Order is presentation order: first declared, first shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalCatalog {
    pub build: Vec<Goal>,
    pub deploy: Vec<Goal>,
}

impl GoalCatalog {
    /// The catalog of a project without any build wrapper.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.build.is_empty() && self.deploy.is_empty()
    }

    /// Resolves the catalog for a located wrapper.
    pub fn resolve(wrapper: &WrapperHandle) -> Result<Self> {
        match wrapper.kind {
            WrapperKind::Maven => Ok(Self::maven()),
            WrapperKind::Gradle => Self::gradle(wrapper),
        }
    }

    /// The fixed Maven catalog. Maven has no task report worth parsing;
    /// these goals map onto phases and `-Dpackaging=` properties.
    pub fn maven() -> Self {
        Self {
            build: vec![
                Goal::new("clean", "Clean the build outputs"),
                Goal::new("build", "Compile the project"),
                Goal::new("test", "Run the project tests"),
                Goal::new("nativeImage", "Build a GraalVM native image"),
                Goal::new("dockerBuild", "Build a Docker image"),
                Goal::new(
                    "dockerBuildNative",
                    "Build a Docker image containing a GraalVM native image",
                ),
            ],
            deploy: vec![
                Goal::new("dockerPush", "Push a Docker image"),
                Goal::new("dockerPushNative", "Push a native Docker image"),
            ],
        }
    }

    /// Runs the Gradle wrapper's task report and parses the build and
    /// upload sections.
    ///
    /// Blocking for the duration of the wrapper run; a spawn failure or a
    /// non-zero exit propagates to the caller unchanged, with no retry and
    /// no partial catalog.
    fn gradle(wrapper: &WrapperHandle) -> Result<Self> {
        let project_dir = format!("--project-dir={}", wrapper.project_dir.display());
        debug!(script = %wrapper.script.display(), "listing Gradle tasks");

        let output = Command::new(&wrapper.script)
            .args(["tasks", "--no-daemon", project_dir.as_str()])
            .current_dir(&wrapper.project_dir)
            .output()
            .with_context(|| format!("Failed to run {}", wrapper.script.display()))?;

        if !output.status.success() {
            bail!(
                "{} tasks exited with {}: {}",
                wrapper.script.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        // Gradle splits its chatter across both streams; parse them as one
        // report.
        let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stderr));

        let catalog = Self {
            build: dedup_by_id(parser::parse_task_section(&report, GRADLE_BUILD_SECTION)),
            deploy: dedup_by_id(parser::parse_task_section(&report, GRADLE_UPLOAD_SECTION)),
        };
        info!(
            build = catalog.build.len(),
            deploy = catalog.deploy.len(),
            "Gradle goals resolved"
        );
        Ok(catalog)
    }
}

/// No goal may appear twice within one sequence; first occurrence wins.
fn dedup_by_id(goals: Vec<Goal>) -> Vec<Goal> {
    let mut seen = HashSet::new();
    goals
        .into_iter()
        .filter(|goal| seen.insert(goal.id.clone()))
        .collect()
}
