/*!
Test support helpers shared across integration tests.

- make_docker_stub(dir): write an executable fake `docker` that records its argv
- recorded_calls(log): read back the recorded invocations, one argv per call

Binaries under test are pointed at the stub through STREAMLINE_DOCKER, so no real
Docker daemon is needed.
*/

use std::fs;
use std::path::{Path, PathBuf};

/// Create an executable stub that:
/// - appends each argv (tab-separated, one call per line) to $STUB_LOG
/// - exits 0 for `image inspect` unless STUB_IMAGE_MISSING=1
/// - exits $STUB_EXIT (default 0) for everything else
#[cfg(unix)]
#[allow(dead_code)]
pub fn make_docker_stub(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let stub_path = dir.join("docker");
    let script = r#"#!/bin/sh
line=""
for a in "$@"; do
  line="${line}${a}	"
done
printf '%s\n' "$line" >> "$STUB_LOG"
if [ "$1" = "image" ] && [ "$2" = "inspect" ]; then
  if [ "$STUB_IMAGE_MISSING" = "1" ]; then
    exit 1
  fi
  exit 0
fi
exit "${STUB_EXIT:-0}"
"#;
    fs::write(&stub_path, script).expect("write stub");
    let mut perms = fs::metadata(&stub_path).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub_path, perms).expect("chmod stub");
    stub_path
}

/// Parse the stub log into one argv vector per docker call.
#[allow(dead_code)]
pub fn recorded_calls(log: &Path) -> Vec<Vec<String>> {
    let contents = fs::read_to_string(log).unwrap_or_default();
    contents
        .lines()
        .map(|l| {
            l.strip_suffix('\t')
                .unwrap_or(l)
                .split('\t')
                .map(|s| s.to_string())
                .collect()
        })
        .collect()
}

/// The recorded docker call whose first argument is `sub` (e.g. "run" or "build").
#[allow(dead_code)]
pub fn find_call(log: &Path, sub: &str) -> Option<Vec<String>> {
    recorded_calls(log)
        .into_iter()
        .find(|c| c.first().map(|s| s.as_str()) == Some(sub))
}
