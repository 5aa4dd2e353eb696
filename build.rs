use std::env;
use std::process::Command;

/// Values shown by `--verbose` next to the package version.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".into());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".into());
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_owned())
        .unwrap_or_else(|| "unknown".into());

    for (key, value) in [
        ("STREAMLINE_BUILD_TARGET", target),
        ("STREAMLINE_BUILD_PROFILE", profile),
        ("STREAMLINE_BUILD_RUSTC", rustc_version),
    ] {
        println!("cargo:rustc-env={key}={value}");
    }
}
