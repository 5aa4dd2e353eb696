use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use streamline_docker::cli::BuildCli;
use streamline_docker::{
    build_image_command, color_enabled_stderr, container_runtime_path, docker_build_preview,
    exit_code_for_io_error, exit_code_for_spawn_error, exit_code_for_status, log_error_stderr,
    log_info_stderr, log_success_stderr, resolve_build_context, run_foreground, BuildRequest,
};

fn main() -> ExitCode {
    let cli = match BuildCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    streamline_docker::telemetry::telemetry_init();
    let use_err = color_enabled_stderr();

    let context = match resolve_build_context() {
        Ok(c) => c,
        Err(e) => {
            log_error_stderr(use_err, &e.to_string());
            return ExitCode::from(1);
        }
    };
    let request = BuildRequest {
        tag: cli.tag.clone(),
        context,
    };

    if cli.verbose {
        for line in streamline_docker::build_info().lines() {
            log_info_stderr(use_err, line);
        }
        log_info_stderr(use_err, &format!("context: {}", request.context.display()));
    }
    if cli.verbose || cli.dry_run {
        log_info_stderr(use_err, &format!("docker: {}", docker_build_preview(&request)));
    }
    if cli.dry_run {
        log_info_stderr(use_err, "dry-run requested; not executing Docker.");
        return ExitCode::from(0);
    }

    let runtime = match container_runtime_path() {
        Ok(p) => p,
        Err(e) => {
            log_error_stderr(use_err, &e.to_string());
            return ExitCode::from(exit_code_for_io_error(&e));
        }
    };

    let image = request.image_reference();
    log_info_stderr(
        use_err,
        &format!("building {} from {}", image, request.context.display()),
    );

    match run_foreground(build_image_command(&runtime, &request)) {
        Ok(status) => {
            let code = exit_code_for_status(&status);
            if status.success() {
                log_success_stderr(use_err, &format!("built {image}"));
            } else {
                log_error_stderr(use_err, &format!("docker build failed with code {code}"));
            }
            ExitCode::from(code)
        }
        Err(e) => {
            log_error_stderr(use_err, &format!("{e:#}"));
            ExitCode::from(exit_code_for_spawn_error(&e))
        }
    }
}
