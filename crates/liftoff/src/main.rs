//! Liftoff - conventional-commit version bump and changelog CLI

mod cli;
mod exit_codes;

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

fn main() {
    let guard = init_tracing();

    if let Err(err) = Cli::parse().execute() {
        eprintln!("{} {err:#}", style("error:").red().bold());
        let code = exit_code(&err);
        drop(guard);
        std::process::exit(code);
    }
}

/// Map an error to its exit code by kind, falling back to the general code
/// for anything unclassified.
fn exit_code(err: &anyhow::Error) -> i32 {
    use liftoff_core::error::{ConfigError, Error, GitError, ReleaseError, VersionError};

    if let Some(err) = err.downcast_ref::<Error>() {
        return match err {
            Error::Release(ReleaseError::NothingToRelease { .. }) => {
                exit_codes::NOTHING_TO_RELEASE
            }
            Error::Release(_) | Error::Parse(_) | Error::Io(_) => exit_codes::ERROR,
            Error::Git(_) => exit_codes::GIT_ERROR,
            Error::Version(_) => exit_codes::VERSION_ERROR,
            Error::Config(_) => exit_codes::CONFIG_ERROR,
        };
    }
    if let Some(err) = err.downcast_ref::<ReleaseError>() {
        return match err {
            ReleaseError::NothingToRelease { .. } => exit_codes::NOTHING_TO_RELEASE,
            ReleaseError::NoTagsFound => exit_codes::ERROR,
        };
    }
    if err.downcast_ref::<GitError>().is_some() {
        return exit_codes::GIT_ERROR;
    }
    if err.downcast_ref::<VersionError>().is_some() {
        return exit_codes::VERSION_ERROR;
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return exit_codes::CONFIG_ERROR;
    }
    exit_codes::ERROR
}

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.liftoff/logs/
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "liftoff.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".liftoff").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
