pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, GoalsArgs, ManifestArgs, RunArgs};
pub use output::{OutputFormat, OutputFormatter};
