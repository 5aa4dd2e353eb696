#![allow(clippy::module_name_repetitions)]
//! Docker image helpers.

use std::path::Path;
use std::process::{Command, Stdio};

/// Repository name of the analysis image; the tag is chosen per invocation.
pub const IMAGE_NAME: &str = "streamline";

pub const DEFAULT_TAG: &str = "latest";

/// Compose `streamline:<tag>`. The tag is used verbatim; docker rejects malformed ones.
pub fn image_reference(tag: &str) -> String {
    format!("{IMAGE_NAME}:{tag}")
}

/// Return true if a docker image exists locally (without pulling).
pub fn image_exists(runtime: &Path, image: &str) -> bool {
    Command::new(runtime)
        .arg("image")
        .arg("inspect")
        .arg(image)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_reference_uses_tag_verbatim() {
        assert_eq!(image_reference(DEFAULT_TAG), "streamline:latest");
        assert_eq!(image_reference("dev"), "streamline:dev");
        assert_eq!(image_reference("Not A Tag"), "streamline:Not A Tag");
    }
}
