#![allow(clippy::module_name_repetitions)]
//! Docker command construction and runtime detection.

pub mod build;
pub mod images;
pub mod run;
pub mod runtime;

pub use build::{
    build_image_command, docker_build_args, docker_build_preview, resolve_build_context,
    BuildRequest,
};
pub use images::{image_exists, image_reference, DEFAULT_TAG, IMAGE_NAME};
pub use run::{
    build_run_command, docker_preview, docker_run_args, resolve_launch_plan, select_tty_mode,
    stdin_is_tty, LaunchPlan, LaunchRequest, MountSpec, TtyMode, TtyPolarity, DEFAULT_SHELL,
    TARGETS_MOUNT_POINT,
};
pub use runtime::container_runtime_path;
