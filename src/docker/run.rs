#![allow(clippy::module_name_repetitions)]
//! Launch plan resolution and docker `run` command construction.
//!
//! A plan is a pure function of the request, the filesystem and whether stdin is a
//! terminal. The mount source and the command stay `OsString` all the way to
//! `Command::args`, so non-UTF-8 paths and tokens with spaces or shell metacharacters
//! reach docker unchanged. Only the preview goes through a lossy conversion.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument};

use crate::docker::images::{image_reference, DEFAULT_TAG};
use crate::errors::LaunchError;

/// Fixed in-container location of the analysis target; the image uses it as workdir.
pub const TARGETS_MOUNT_POINT: &str = "/home/streamline/targets";

/// Command run when the operator gives none.
pub const DEFAULT_SHELL: &str = "bash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub image_tag: String,
    pub target_dir: Option<PathBuf>,
    pub command: Vec<OsString>,
}

impl LaunchRequest {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_tag: DEFAULT_TAG.to_string(),
            target_dir: Some(target_dir.into()),
            command: Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TtyMode {
    /// `-i`: keep stdin open, no pseudo-terminal.
    Interactive,
    /// `-it`: keep stdin open and allocate a pseudo-terminal.
    InteractiveTty,
}

impl TtyMode {
    pub fn flag(&self) -> &'static str {
        match self {
            TtyMode::Interactive => "-i",
            TtyMode::InteractiveTty => "-it",
        }
    }
}

/// Which way terminal attachment maps onto [`TtyMode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TtyPolarity {
    /// Terminal-attached stdin requests a pseudo-terminal.
    #[default]
    Conventional,
    /// Terminal-attached stdin gets `-i` only; anything else gets `-it`.
    /// Matches the shell launcher this tool replaced.
    Legacy,
}

impl TtyPolarity {
    pub fn parse(s: &str) -> Option<TtyPolarity> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conventional" | "default" => Some(TtyPolarity::Conventional),
            "legacy" | "compat" => Some(TtyPolarity::Legacy),
            _ => None,
        }
    }

    /// Read `STREAMLINE_TTY_POLARITY`; unknown or unset values mean conventional.
    pub fn from_env() -> TtyPolarity {
        env::var("STREAMLINE_TTY_POLARITY")
            .ok()
            .and_then(|v| TtyPolarity::parse(&v))
            .unwrap_or_default()
    }
}

pub fn select_tty_mode(stdin_is_tty: bool, polarity: TtyPolarity) -> TtyMode {
    match (polarity, stdin_is_tty) {
        (TtyPolarity::Conventional, true) | (TtyPolarity::Legacy, false) => TtyMode::InteractiveTty,
        (TtyPolarity::Conventional, false) | (TtyPolarity::Legacy, true) => TtyMode::Interactive,
    }
}

pub fn stdin_is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub source: PathBuf,
    pub target: String,
}

impl MountSpec {
    /// `<source>:<target>` built from the raw path bytes.
    pub fn volume_arg(&self) -> OsString {
        let mut arg = self.source.as_os_str().to_os_string();
        arg.push(":");
        arg.push(&self.target);
        arg
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub image_reference: String,
    pub mount: MountSpec,
    pub tty: TtyMode,
    pub command: Vec<OsString>,
    /// True when the operator gave no command and [`DEFAULT_SHELL`] was substituted.
    pub command_defaulted: bool,
}

/// Validate the request and resolve everything docker needs.
///
/// Errors name the path exactly as the operator supplied it.
#[instrument(level = "debug", skip(request), fields(tag = %request.image_tag))]
pub fn resolve_launch_plan(
    request: &LaunchRequest,
    stdin_is_tty: bool,
    polarity: TtyPolarity,
) -> Result<LaunchPlan, LaunchError> {
    let target = request
        .target_dir
        .as_deref()
        .ok_or(LaunchError::MissingTarget)?;
    let source = canonical_target_dir(target)?;

    let command_defaulted = request.command.is_empty();
    let command = if command_defaulted {
        vec![OsString::from(DEFAULT_SHELL)]
    } else {
        request.command.clone()
    };

    let tty = select_tty_mode(stdin_is_tty, polarity);
    debug!(source = %source.display(), tty = tty.flag(), "resolved launch plan");

    Ok(LaunchPlan {
        image_reference: image_reference(&request.image_tag),
        mount: MountSpec {
            source,
            target: TARGETS_MOUNT_POINT.to_string(),
        },
        tty,
        command,
        command_defaulted,
    })
}

fn canonical_target_dir(target: &Path) -> Result<PathBuf, LaunchError> {
    // metadata follows symlinks, so a link to a directory is accepted
    match fs::metadata(target) {
        Ok(md) if md.is_dir() => {}
        Ok(_) => return Err(LaunchError::NotADirectory(target.to_path_buf())),
        Err(_) => return Err(LaunchError::TargetNotFound(target.to_path_buf())),
    }
    let canon = fs::canonicalize(target)?;
    if has_colon(&canon) {
        return Err(LaunchError::AmbiguousMountSource(canon));
    }
    Ok(canon)
}

#[cfg(unix)]
fn has_colon(p: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    p.as_os_str().as_bytes().contains(&b':')
}

// Drive letters carry a colon that docker understands on Windows.
#[cfg(not(unix))]
fn has_colon(_p: &Path) -> bool {
    false
}

/// Arguments passed to the docker CLI, program name excluded.
pub fn docker_run_args(plan: &LaunchPlan) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        OsString::from("run"),
        OsString::from("--rm"),
        OsString::from(plan.tty.flag()),
        OsString::from("-v"),
        plan.mount.volume_arg(),
        OsString::from("-w"),
        OsString::from(&plan.mount.target),
        OsString::from(&plan.image_reference),
    ];
    args.extend(plan.command.iter().cloned());
    args
}

/// Shell-escaped rendering of the docker invocation for `--dry-run`/`--verbose`.
pub fn docker_preview(plan: &LaunchPlan) -> String {
    let mut words = vec!["docker".to_string()];
    words.extend(
        docker_run_args(plan)
            .iter()
            .map(|a| a.to_string_lossy().into_owned()),
    );
    crate::shell_join(&words)
}

pub fn build_run_command(runtime: &Path, plan: &LaunchPlan) -> Command {
    let mut cmd = Command::new(runtime);
    cmd.args(docker_run_args(plan));
    cmd
}
