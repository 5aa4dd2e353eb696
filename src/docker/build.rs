#![allow(clippy::module_name_repetitions)]
//! Docker `build` command construction for the analysis image.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::instrument;

use crate::docker::images::image_reference;

/// Repository root at compile time; the Dockerfile lives here.
const DEFAULT_BUILD_CONTEXT: &str = env!("CARGO_MANIFEST_DIR");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub tag: String,
    /// Absolute build context directory.
    pub context: PathBuf,
}

impl BuildRequest {
    pub fn image_reference(&self) -> String {
        image_reference(&self.tag)
    }
}

/// Resolve the build context: `STREAMLINE_BUILD_CONTEXT` when set, else the repository root.
///
/// The result is canonical so the builder works from any current directory.
pub fn resolve_build_context() -> io::Result<PathBuf> {
    let raw = env::var("STREAMLINE_BUILD_CONTEXT")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_BUILD_CONTEXT.to_string());
    canonical_context(Path::new(&raw))
}

fn canonical_context(p: &Path) -> io::Result<PathBuf> {
    let canon = fs::canonicalize(p).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot resolve build context {}: {e}", p.display()),
        )
    })?;
    if !canon.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("build context is not a directory: {}", canon.display()),
        ));
    }
    Ok(canon)
}

/// The context path is passed as raw bytes, never through `display()`.
pub fn docker_build_args(request: &BuildRequest) -> Vec<OsString> {
    vec![
        OsString::from("build"),
        OsString::from("-t"),
        OsString::from(request.image_reference()),
        request.context.as_os_str().to_os_string(),
    ]
}

pub fn docker_build_preview(request: &BuildRequest) -> String {
    let mut words = vec!["docker".to_string()];
    words.extend(
        docker_build_args(request)
            .iter()
            .map(|a| a.to_string_lossy().into_owned()),
    );
    crate::shell_join(&words)
}

#[instrument(level = "debug", skip(runtime), fields(image = %request.image_reference()))]
pub fn build_image_command(runtime: &Path, request: &BuildRequest) -> Command {
    let mut cmd = Command::new(runtime);
    cmd.args(docker_build_args(request));
    cmd
}
