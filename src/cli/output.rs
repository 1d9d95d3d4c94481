//! Output formatting for goal listings
//!
//! Human-readable text for interactive use, JSON for tooling.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::goals::GoalCatalog;
use crate::wrapper::{WrapperHandle, WrapperKind};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

#[derive(Serialize)]
struct CatalogReport<'a> {
    wrapper: Option<&'static str>,
    project_dir: Option<String>,
    #[serde(flatten)]
    catalog: &'a GoalCatalog,
}

/// Formatter for the resolved goal catalog
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a goal catalog, with the wrapper it was resolved from when
    /// one exists.
    pub fn format_catalog(
        &self,
        catalog: &GoalCatalog,
        wrapper: Option<&WrapperHandle>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(catalog, wrapper),
            OutputFormat::Human => Ok(self.format_human(catalog, wrapper)),
        }
    }

    fn format_json(&self, catalog: &GoalCatalog, wrapper: Option<&WrapperHandle>) -> Result<String> {
        let report = CatalogReport {
            wrapper: wrapper.map(|w| kind_name(w.kind)),
            project_dir: wrapper.map(|w| w.project_dir.display().to_string()),
            catalog,
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize goal catalog")
    }

    fn format_human(&self, catalog: &GoalCatalog, wrapper: Option<&WrapperHandle>) -> String {
        let mut out = String::new();

        match wrapper {
            Some(wrapper) => {
                out.push_str(&format!(
                    "Project: {} ({})\n",
                    wrapper.project_dir.display(),
                    kind_name(wrapper.kind)
                ));
            }
            None => {
                out.push_str("No build wrapper found; no goals available.\n");
                out.push_str(&format!(
                    "The default goal is '{}'.\n",
                    crate::goals::DEFAULT_GOAL
                ));
                return out;
            }
        }

        out.push_str("\nBuild goals:\n");
        if catalog.build.is_empty() {
            out.push_str("  (none)\n");
        }
        for goal in &catalog.build {
            out.push_str(&format!("  {} - {}\n", goal.id, goal.description));
        }

        out.push_str("\nDeploy goals:\n");
        if catalog.deploy.is_empty() {
            out.push_str("  (none)\n");
        }
        for goal in &catalog.deploy {
            out.push_str(&format!("  {} - {}\n", goal.id, goal.description));
        }

        out
    }
}

fn kind_name(kind: WrapperKind) -> &'static str {
    match kind {
        WrapperKind::Gradle => "Gradle",
        WrapperKind::Maven => "Maven",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::Goal;
    use std::path::PathBuf;

    fn gradle_handle() -> WrapperHandle {
        WrapperHandle {
            kind: WrapperKind::Gradle,
            script: PathBuf::from("/work/demo/gradlew"),
            project_dir: PathBuf::from("/work/demo"),
        }
    }

    fn catalog() -> GoalCatalog {
        GoalCatalog {
            build: vec![Goal::new("build", "Assembles and tests this project.")],
            deploy: vec![Goal::new("dockerPush", "Pushes the Docker image.")],
        }
    }

    #[test]
    fn test_human_output_lists_both_sections() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let text = formatter
            .format_catalog(&catalog(), Some(&gradle_handle()))
            .unwrap();
        assert!(text.contains("Gradle"));
        assert!(text.contains("build - Assembles and tests this project."));
        assert!(text.contains("dockerPush - Pushes the Docker image."));
    }

    #[test]
    fn test_human_output_without_wrapper() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let text = formatter
            .format_catalog(&GoalCatalog::empty(), None)
            .unwrap();
        assert!(text.contains("No build wrapper found"));
        assert!(text.contains("'build'"));
    }

    #[test]
    fn test_json_output_shape() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let text = formatter
            .format_catalog(&catalog(), Some(&gradle_handle()))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["wrapper"], "Gradle");
        assert_eq!(value["build"][0]["id"], "build");
        assert_eq!(value["deploy"][0]["id"], "dockerPush");
    }

    #[test]
    fn test_json_output_empty_catalog() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let text = formatter
            .format_catalog(&GoalCatalog::empty(), None)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["wrapper"].is_null());
        assert_eq!(value["build"].as_array().unwrap().len(), 0);
        assert_eq!(value["deploy"].as_array().unwrap().len(), 0);
    }
}
