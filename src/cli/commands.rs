use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Build and deploy helper for Micronaut projects
#[derive(Parser, Debug)]
#[command(
    name = "mnbuild",
    about = "Build and deploy helper for Micronaut projects",
    version,
    author,
    long_about = "mnbuild locates the Gradle or Maven wrapper checked into a Micronaut \
                  project, discovers the available build and deploy goals, and runs the \
                  chosen goal in a shell session. It can also render the Kubernetes \
                  Deployment manifest used when deploying the built image."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List build and deploy goals for a project",
        long_about = "Locates the project's build wrapper and lists the available build \
                      and deploy goals. For Maven the list is fixed; for Gradle it is \
                      read from the wrapper's task report.\n\n\
                      Examples:\n  \
                      mnbuild goals\n  \
                      mnbuild goals /path/to/project\n  \
                      mnbuild goals --format json"
    )]
    Goals(GoalsArgs),

    #[command(
        about = "Run a build or deploy goal",
        long_about = "Synthesizes the wrapper command line for a goal and runs it in a \
                      shell session. Native-image goals are pre-checked against the \
                      configured Java toolchain.\n\n\
                      Examples:\n  \
                      mnbuild run build\n  \
                      mnbuild run nativeImage /path/to/project\n  \
                      mnbuild run dockerBuild --dry-run"
    )]
    Run(RunArgs),

    #[command(
        about = "Render the Kubernetes Deployment manifest",
        long_about = "Renders the Deployment manifest used when deploying the built \
                      image to a cluster.\n\n\
                      Examples:\n  \
                      mnbuild manifest --name demo --image registry.example.com/demo:latest\n  \
                      mnbuild manifest --name demo --image demo:latest --docker-secret regcred -o deploy.yaml"
    )]
    Manifest(ManifestArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GoalsArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[arg(
        value_name = "GOAL",
        help = "Abstract goal identifier (e.g. build, nativeImage, dockerBuild)"
    )]
    pub goal: String,

    #[arg(
        value_name = "PATH",
        help = "Path to the project (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(long, help = "Print the synthesized command line instead of running it")]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ManifestArgs {
    #[arg(long, value_name = "NAME", help = "Application name")]
    pub name: String,

    #[arg(
        long,
        value_name = "NAMESPACE",
        default_value = "default",
        help = "Target namespace"
    )]
    pub namespace: String,

    #[arg(long, value_name = "IMAGE", help = "Container image reference")]
    pub image: String,

    #[arg(long, value_name = "SECRET", help = "Image pull secret name")]
    pub docker_secret: Option<String>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the manifest to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
}
