#![allow(clippy::module_name_repetitions)]
//! Docker runtime discovery.

use std::env;
use std::io;
use std::path::PathBuf;

use which::which;

/// Locate the docker CLI.
///
/// `STREAMLINE_DOCKER` names an explicit docker-compatible executable (tests point it
/// at a stub); otherwise `docker` is looked up on PATH.
pub fn container_runtime_path() -> io::Result<PathBuf> {
    if let Ok(explicit) = env::var("STREAMLINE_DOCKER") {
        let explicit = explicit.trim();
        if !explicit.is_empty() {
            let p = PathBuf::from(explicit);
            if p.is_file() {
                return Ok(p);
            }
            // Allow a bare program name, resolved through PATH
            if let Ok(p) = which(explicit) {
                return Ok(p);
            }
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("STREAMLINE_DOCKER points to a missing executable: {explicit}"),
            ));
        }
    }

    if let Ok(p) = which("docker") {
        return Ok(p);
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Docker is required but was not found in PATH.",
    ))
}
