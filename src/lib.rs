//! mnbuild - build and deploy helper for Micronaut projects
//!
//! This library locates the build wrapper checked into a Micronaut project,
//! resolves the abstract build/deploy goals it supports, and turns a chosen
//! goal into the literal wrapper command line.
//!
//! # Core Concepts
//!
//! - **Wrapper**: a checked-in launcher script (`gradlew`, `mvnw`) that
//!   runs the build tool without a pre-installed system copy
//! - **Abstract goal**: a build-tool-agnostic action identifier (`build`,
//!   `nativeImage`, `dockerBuild`, ...) translated into tool-specific
//!   syntax at synthesis time
//! - **Goal catalog**: the build and deploy goal sequences of one project,
//!   fixed for Maven and discovered from the task report for Gradle
//!
//! # Example Usage
//!
//! ```ignore
//! use mnbuild::{synthesize, GoalCatalog};
//! use std::path::Path;
//!
//! async fn build_command(workspace: &Path) -> Option<String> {
//!     let handle = mnbuild::wrapper::locate(workspace).await?;
//!     let catalog = GoalCatalog::resolve(&handle).ok()?;
//!     let goal = catalog.build.first()?;
//!     Some(synthesize(&goal.id, &handle))
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`wrapper`]: Gradle/Maven wrapper discovery
//! - [`goals`]: goal catalog resolution and the Gradle task-report parser
//! - [`command`]: command-line synthesis
//! - [`toolchain`]: GraalVM native-image pre-checks
//! - [`terminal`]: named build-session launch
//! - [`manifest`]: Kubernetes Deployment manifest rendering

pub mod cli;
pub mod command;
pub mod config;
pub mod goals;
pub mod manifest;
pub mod terminal;
pub mod toolchain;
pub mod wrapper;

// Re-export key types for convenient access
pub use command::synthesize;
pub use config::{ConfigError, MnbuildConfig};
pub use goals::{Goal, GoalCatalog, DEFAULT_GOAL};
pub use manifest::ManifestParams;
pub use terminal::{JavaEnv, LaunchError, Started, TerminalSession, TERMINAL_NAME};
pub use toolchain::NativeImageCheck;
pub use wrapper::{locate, WrapperHandle, WrapperKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
