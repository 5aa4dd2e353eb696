//! Host-side builder and launcher for the streamline analysis image.
//!
//! `streamline-build` produces `streamline:<tag>` from the repository Dockerfile;
//! `streamline-run` starts that image with a target directory bind-mounted and
//! hands the container's exit status back to the caller.

pub mod cli;
mod color;
pub mod docker;
mod errors;
pub mod telemetry;
mod util;

pub use color::{
    color_enabled_stderr, log_error_stderr, log_info_stderr, log_success_stderr,
    log_warn_stderr, paint, set_color_mode, ColorMode,
};
pub use docker::*;
pub use errors::{
    exit_code_for_io_error, exit_code_for_launch_error, exit_code_for_status, LaunchError,
};
pub use util::exec::{exit_code_for_spawn_error, run_foreground};
pub use util::{shell_escape, shell_join};

/// Build metadata baked in by build.rs, one `key: value` per line.
pub fn build_info() -> String {
    [
        format!("version: {}", env!("CARGO_PKG_VERSION")),
        format!("target: {}", env!("STREAMLINE_BUILD_TARGET")),
        format!("profile: {}", env!("STREAMLINE_BUILD_PROFILE")),
        format!("rustc: {}", env!("STREAMLINE_BUILD_RUSTC")),
    ]
    .join("\n")
}
