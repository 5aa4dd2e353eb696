//! Error mapping guide:
//! - Map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - Usage and target-directory errors exit 1.
//! - A reached docker invocation hands its own status back unchanged.
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

/// Failures detected before docker is ever invoked.
#[derive(Debug)]
pub enum LaunchError {
    /// No `<targets_dir>` positional was given.
    MissingTarget,
    /// Nothing exists at the path as supplied by the operator.
    TargetNotFound(PathBuf),
    /// The path exists but is not a directory.
    NotADirectory(PathBuf),
    /// The resolved directory contains `:`, which `-v src:dst` cannot express.
    AmbiguousMountSource(PathBuf),
    Io(io::Error),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::MissingTarget => write!(f, "missing target directory"),
            LaunchError::TargetNotFound(p) => {
                write!(f, "target directory does not exist: {}", p.display())
            }
            LaunchError::NotADirectory(p) => write!(f, "not a directory: {}", p.display()),
            LaunchError::AmbiguousMountSource(p) => write!(
                f,
                "cannot bind-mount a path containing ':': {}",
                p.display()
            ),
            LaunchError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LaunchError {
    fn from(e: io::Error) -> Self {
        LaunchError::Io(e)
    }
}

pub fn exit_code_for_launch_error(e: &LaunchError) -> u8 {
    match e {
        LaunchError::MissingTarget
        | LaunchError::TargetNotFound(_)
        | LaunchError::NotADirectory(_)
        | LaunchError::AmbiguousMountSource(_) => 1,
        LaunchError::Io(ioe) => exit_code_for_io_error(ioe),
    }
}

/// Exit code to report for a finished docker process.
///
/// Normal exits are returned verbatim (truncated to a byte, as the OS does);
/// a signal-terminated child maps to 128+signal like a POSIX shell.
pub fn exit_code_for_status(status: &ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return (code & 0xff) as u8;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return (128 + (sig & 0x7f)) as u8;
        }
    }
    1
}
