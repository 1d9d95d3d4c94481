//! Parser for Gradle's textual task report
//!
//! `gradlew tasks` prints sections of the form:
//!
//! ```text
//! Build tasks
//! -----------
//! assemble - Assembles the outputs of this project.
//! build - Assembles and tests this project.
//!
//! ```
//!
//! [`parse_task_section`] extracts the `name - description` entries of one
//! named section. A section runs from its exact header line to the next
//! blank line; `---` divider lines are skipped and anything else that does
//! not look like a task entry is dropped.

use crate::goals::Goal;
use regex::Regex;
use std::sync::OnceLock;

const SECTION_DIVIDER: &str = "---";

/// `<task> - <description>`, whitespace around the hyphen optional.
fn task_line() -> &'static Regex {
    static TASK_LINE: OnceLock<Regex> = OnceLock::new();
    TASK_LINE.get_or_init(|| Regex::new(r"^(\w+)\s*-\s*(.*)$").unwrap())
}

/// Extracts the task entries of the section introduced by `header`.
///
/// Every occurrence of the header re-arms capture; Gradle prints each header
/// once, so this only matters for degenerate input. A header with no
/// terminating blank line before end-of-input simply captures through to the
/// end, which is benign.
pub fn parse_task_section(report: &str, header: &str) -> Vec<Goal> {
    let mut goals = Vec::new();
    let mut in_section = false;

    for raw in report.lines() {
        let line = raw.trim();

        if line == header {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if line.is_empty() {
            in_section = false;
            continue;
        }
        if line.starts_with(SECTION_DIVIDER) {
            continue;
        }
        if let Some(caps) = task_line().captures(line) {
            goals.push(Goal::new(&caps[1], &caps[2]));
        }
    }

    goals
}
