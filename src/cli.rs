use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::color::ColorMode;
use crate::docker::{LaunchRequest, DEFAULT_TAG};

/// Launcher arguments.
///
/// Options are only recognised before `<targets_dir>`. The target and everything after it
/// are collected into one trailing list, so tokens following the target are never matched
/// against the launcher's own options.
#[derive(Parser, Debug)]
#[command(
    name = "streamline-run",
    version,
    about = "Run the streamline analysis image with a target directory bind-mounted.",
    override_usage = "streamline-run [-h] [-t <tag>] <targets_dir> [<cmd>...]",
    after_long_help = "Examples:\n  streamline-run ./firmware\n  streamline-run -t dev /tmp/proj\n  streamline-run /tmp/proj ls -la /home\n"
)]
pub struct RunCli {
    /// Image tag to run (image streamline:<tag>)
    #[arg(short = 't', long = "tag", value_name = "tag", default_value = DEFAULT_TAG)]
    pub tag: String,

    /// Print the docker command instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print detailed execution info
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Colorize output: auto|always|never
    #[arg(long = "color", value_enum)]
    pub color: Option<ColorMode>,

    /// Directory to mount inside the container, then the command and arguments to run
    /// there (default: interactive shell)
    #[arg(
        value_name = "targets_dir",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub argv: Vec<OsString>,
}

impl RunCli {
    pub fn targets_dir(&self) -> Option<PathBuf> {
        self.argv.first().map(PathBuf::from)
    }

    pub fn container_command(&self) -> Vec<OsString> {
        self.argv.iter().skip(1).cloned().collect()
    }

    pub fn launch_request(&self) -> LaunchRequest {
        LaunchRequest {
            image_tag: self.tag.clone(),
            target_dir: self.targets_dir(),
            command: self.container_command(),
        }
    }

    pub fn usage() -> String {
        RunCli::command().render_usage().to_string()
    }
}

/// Image builder arguments.
#[derive(Parser, Debug)]
#[command(
    name = "streamline-build",
    version,
    about = "Build the streamline analysis image from the repository Dockerfile.",
    override_usage = "streamline-build [tag]"
)]
pub struct BuildCli {
    /// Print the docker command instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print detailed execution info
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Tag for the built image (image streamline:<tag>)
    #[arg(value_name = "tag", default_value = DEFAULT_TAG)]
    pub tag: String,
}
