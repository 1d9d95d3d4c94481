//! Build session launch
//!
//! The synthesized command line runs in a named shell session, the CLI
//! stand-in for an IDE terminal panel. Launching reports success or failure
//! explicitly via [`Started`]/[`LaunchError`]; completion of the build
//! itself is not awaited here and its output is not captured.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use thiserror::Error;
use tracing::{debug, info};

/// Reserved name of the single build session.
pub const TERMINAL_NAME: &str = "Micronaut";

const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to spawn shell for session '{name}'")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Environment pre-seeded into the session when a Java toolchain home is
/// configured.
#[derive(Debug, Clone, Default)]
pub struct JavaEnv {
    pub java_home: Option<PathBuf>,
}

impl JavaEnv {
    pub fn new(java_home: Option<PathBuf>) -> Self {
        Self { java_home }
    }

    /// `JAVA_HOME` plus a `PATH` with the toolchain's bin directory first.
    pub fn variables(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        if let Some(home) = &self.java_home {
            vars.insert("JAVA_HOME".to_string(), home.display().to_string());
            let bin = home.join("bin");
            let path = match env::var("PATH") {
                Ok(existing) => format!("{}{}{}", bin.display(), PATH_SEPARATOR, existing),
                Err(_) => bin.display().to_string(),
            };
            vars.insert("PATH".to_string(), path);
        }
        vars
    }
}

/// A named shell session.
///
/// At most one session per name is intended to exist at a time: sending a
/// command first disposes of any previous child this process still owns
/// under the reserved name. Once spawned, the build belongs to the OS; a
/// second overlapping invocation simply wins the name (last write wins, no
/// locking).
pub struct TerminalSession {
    name: String,
    env: JavaEnv,
    current: Option<Child>,
}

impl TerminalSession {
    pub fn open(name: impl Into<String>, env: JavaEnv) -> Self {
        Self {
            name: name.into(),
            env,
            current: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sends a command line to the session as if the user typed it.
    ///
    /// The shell runs detached in `cwd`; the exit status of the build is
    /// not awaited.
    pub fn send(&mut self, command_line: &str, cwd: &Path) -> Result<Started, LaunchError> {
        if let Some(mut old) = self.current.take() {
            debug!(name = %self.name, "disposing previous session");
            let _ = old.kill();
            let _ = old.wait();
        }

        let (shell, flag) = shell_command();
        info!(name = %self.name, command = command_line, "launching build session");

        let mut cmd = Command::new(shell);
        cmd.arg(flag)
            .arg(command_line)
            .current_dir(cwd)
            .stdin(Stdio::null());
        for (key, value) in self.env.variables() {
            cmd.env(key, value);
        }

        let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            name: self.name.clone(),
            source,
        })?;
        let started = Started { pid: child.id() };
        self.current = Some(child);
        Ok(started)
    }
}

fn shell_command() -> (String, &'static str) {
    if cfg!(windows) {
        ("cmd".to_string(), "/C")
    } else {
        (
            env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string()),
            "-c",
        )
    }
}

/// Evidence that the session accepted the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Started {
    pub pid: u32,
}
