//! Subcommand handlers
//!
//! Each handler runs one subcommand end to end and returns the process
//! exit code.

use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, warn};

use crate::cli::commands::{GoalsArgs, ManifestArgs, OutputFormatArg, RunArgs};
use crate::cli::output::{OutputFormat, OutputFormatter};
use crate::command;
use crate::config::MnbuildConfig;
use crate::goals::GoalCatalog;
use crate::manifest::{self, ManifestParams};
use crate::terminal::{JavaEnv, TerminalSession, TERMINAL_NAME};
use crate::toolchain::{self, NativeImageCheck};
use crate::wrapper;

/// Lists the goal catalog of a project. A project without a wrapper yields
/// an empty catalog, not an error.
pub async fn handle_goals(args: &GoalsArgs) -> i32 {
    let workspace = resolve_workspace(args.project_path.clone());
    let format = match args.format {
        OutputFormatArg::Human => OutputFormat::Human,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let formatter = OutputFormatter::new(format);

    let located = wrapper::locate(&workspace).await;
    let catalog = match &located {
        Some(handle) => match GoalCatalog::resolve(handle) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(error = ?e, "goal resolution failed");
                eprintln!("Error: {:#}", e);
                return 1;
            }
        },
        None => GoalCatalog::empty(),
    };

    match formatter.format_catalog(&catalog, located.as_ref()) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

/// Runs a goal: locate wrapper, pre-check native tooling, synthesize the
/// command line, launch the session.
pub async fn handle_run(args: &RunArgs, config: &MnbuildConfig) -> i32 {
    let workspace = resolve_workspace(args.project_path.clone());

    if let Err(e) = config.validate() {
        warn!(error = %e, "ignoring configured Java home");
    }
    let java_home = config.effective_java_home().cloned();

    let handle = match wrapper::locate(&workspace).await {
        Some(handle) => handle,
        None => {
            eprintln!(
                "Error: no command available for goal '{}': no Gradle or Maven wrapper found in {}",
                args.goal,
                workspace.display()
            );
            return 1;
        }
    };

    if toolchain::requires_native_image(&args.goal) {
        if let NativeImageCheck::Missing { gu } = toolchain::check_native_image(java_home.as_deref())
        {
            eprintln!(
                "Error: native-image is not installed in the configured Java toolchain.\n\
                 Install it first: {} install native-image",
                gu.display()
            );
            return 1;
        }
    }

    let command_line = command::synthesize(&args.goal, &handle);
    if args.dry_run {
        println!("{}", command_line);
        return 0;
    }

    let mut session = TerminalSession::open(TERMINAL_NAME, JavaEnv::new(java_home));
    match session.send(&command_line, &handle.project_dir) {
        Ok(started) => {
            debug!(pid = started.pid, "build session started");
            println!("Started '{}' in session '{}'", args.goal, session.name());
            0
        }
        Err(e) => {
            error!(error = %e, "launch failed");
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Renders the Deployment manifest to stdout or a file.
pub fn handle_manifest(args: &ManifestArgs) -> i32 {
    let params = ManifestParams {
        name: args.name.clone(),
        namespace: args.namespace.clone(),
        image: args.image.clone(),
        docker_secret: args.docker_secret.clone(),
    };
    let rendered = manifest::render(&params);

    match &args.output {
        Some(path) => match fs::write(path, rendered) {
            Ok(()) => {
                println!("Wrote {}", path.display());
                0
            }
            Err(e) => {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                1
            }
        },
        None => {
            print!("{}", rendered);
            0
        }
    }
}

fn resolve_workspace(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
