use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use streamline_docker::cli::RunCli;
use streamline_docker::{
    build_run_command, color_enabled_stderr, container_runtime_path, docker_preview,
    exit_code_for_io_error, exit_code_for_launch_error, exit_code_for_spawn_error,
    exit_code_for_status, image_exists, log_error_stderr, log_info_stderr, log_success_stderr,
    log_warn_stderr, resolve_launch_plan, run_foreground, set_color_mode, stdin_is_tty,
    LaunchError, TtyPolarity, DEFAULT_SHELL,
};

fn main() -> ExitCode {
    let cli = match RunCli::try_parse() {
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

    if let Some(mode) = cli.color {
        set_color_mode(mode);
    }
    streamline_docker::telemetry::telemetry_init();
    let use_err = color_enabled_stderr();

    let request = cli.launch_request();
    let polarity = TtyPolarity::from_env();
    let plan = match resolve_launch_plan(&request, stdin_is_tty(), polarity) {
        Ok(p) => p,
        Err(e) => {
            log_error_stderr(use_err, &e.to_string());
            if let LaunchError::MissingTarget = e {
                eprint!("{}", RunCli::usage());
                eprintln!();
            }
            return ExitCode::from(exit_code_for_launch_error(&e));
        }
    };

    if plan.command_defaulted {
        log_info_stderr(
            use_err,
            &format!("no command given, starting interactive shell: {DEFAULT_SHELL}"),
        );
    }

    if cli.verbose {
        for line in streamline_docker::build_info().lines() {
            log_info_stderr(use_err, line);
        }
        log_info_stderr(use_err, &format!("image: {}", plan.image_reference));
        log_info_stderr(
            use_err,
            &format!("mount: {} -> {}", plan.mount.source.display(), plan.mount.target),
        );
        log_info_stderr(
            use_err,
            &format!("tty: {} ({:?} polarity)", plan.tty.flag(), polarity),
        );
    }
    if cli.verbose || cli.dry_run {
        log_info_stderr(use_err, &format!("docker: {}", docker_preview(&plan)));
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

    if !image_exists(&runtime, &plan.image_reference) {
        log_warn_stderr(
            use_err,
            &format!(
                "image {} not found locally; build it with: streamline-build {}",
                plan.image_reference, request.image_tag
            ),
        );
    }

    log_info_stderr(
        use_err,
        &format!(
            "starting {} with {} mounted at {}",
            plan.image_reference,
            plan.mount.source.display(),
            plan.mount.target
        ),
    );

    match run_foreground(build_run_command(&runtime, &plan)) {
        Ok(status) => {
            let code = exit_code_for_status(&status);
            if status.success() {
                log_success_stderr(use_err, "container exited");
            } else {
                log_error_stderr(use_err, &format!("container exited with code {code}"));
            }
            ExitCode::from(code)
        }
        Err(e) => {
            log_error_stderr(use_err, &format!("{e:#}"));
            ExitCode::from(exit_code_for_spawn_error(&e))
        }
    }
}
