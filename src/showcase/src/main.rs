#![allow(special_module_name)]
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::ShowcaseResult;
use crate::lib::logger::{create_root_logger, LoggingMode};
use anyhow::{Context, Error};
use clap::{ArgAction, Parser};
use std::io::Write;
use std::path::PathBuf;

mod commands;
mod lib;

/// Presents n8n workflows as showcase cards.
#[derive(Parser)]
#[command(name = "showcase", version, arg_required_else_help = true)]
pub struct CliOpts {
    /// Displays detailed information about operations.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", default_value = "stderr", value_parser = ["stderr", "tee", "file"], global = true)]
    logmode: String,

    /// The file to log to, if logging to a file (see --log).
    #[arg(long, env = "SHOWCASE_LOGFILE", global = true)]
    logfile: Option<String>,

    #[command(subcommand)]
    command: commands::ShowcaseCommand,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> ShowcaseResult<slog::Logger> {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;
    let logfile = || PathBuf::from(opts.logfile.as_deref().unwrap_or("log.txt"));

    let mode = match opts.logmode.as_str() {
        "tee" => LoggingMode::Tee(logfile()),
        "file" => LoggingMode::File(logfile()),
        _ => LoggingMode::Stderr,
    };

    create_root_logger(verbose_level, mode)
        .with_context(|| format!("Failed to open log file {}.", logfile().display()))
}

fn print_error(err: Error) {
    let Some(mut stderr) = term::stderr() else {
        for (level, cause) in err.chain().enumerate() {
            let prefix = if level == 0 { "Error" } else { "Caused by" };
            eprintln!("{prefix}: {cause}");
        }
        return;
    };

    for (level, cause) in err.chain().enumerate() {
        let (color, prefix) = if level == 0 {
            (term::color::RED, "Error")
        } else {
            (term::color::YELLOW, "Caused by")
        };
        let _ = stderr.fg(color);
        let _ = write!(stderr, "{prefix}: ");
        let _ = stderr.reset();
        let _ = writeln!(stderr, "{cause}");
    }
}

fn inner_main() -> ShowcaseResult {
    let cli_opts = CliOpts::parse();
    let log = setup_logging(&cli_opts)?;

    let env = EnvironmentImpl::new()?.with_logger(log);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    if let Some(manifest) = env.get_showcase().manifest_path() {
        slog::debug!(env.get_logger(), "Using manifest {}", manifest.display());
    }
    commands::exec(&env, cli_opts.command)
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        print_error(err);
        std::process::exit(255);
    }
}
