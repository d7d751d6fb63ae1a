//! Application wiring: logging setup and command execution.

use crate::cli::CliArgs;
use mdsweep_core::{Result, StripRules, clean_path};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the cleaner with parsed arguments.
pub async fn run(args: CliArgs) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    let target = absolutize(&args.path)?;
    let summary = clean_path(&target, &StripRules::default()).await?;

    info!(
        examined = summary.examined,
        rewritten = summary.rewritten,
        "cleaning complete"
    );
    Ok(())
}

/// Resolve a possibly-relative path against the current directory.
///
/// Does not require the path to exist; a missing path is reported by
/// the walker as an invalid-path error instead of a bare I/O error.
fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mdsweep_core::Error;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_default() {
        // Should not panic
        init_logging(false, false);
    }

    #[test]
    fn test_init_logging_verbose() {
        init_logging(true, false);
    }

    #[test]
    fn test_init_logging_quiet() {
        init_logging(false, true);
    }

    #[test]
    fn test_absolutize_keeps_absolute_path() {
        let path = Path::new("/var/docs");
        assert_eq!(absolutize(path).unwrap(), PathBuf::from("/var/docs"));
    }

    #[test]
    fn test_absolutize_relative_path() {
        let resolved = absolutize(Path::new("docs")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("docs"));
    }

    #[tokio::test]
    async fn test_run_cleans_target_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("daily.md");
        std::fs::write(&file, "> [访问网页版](a) | [进群交流](b)\n正文\n").unwrap();

        let args = CliArgs::parse_from(["mdsweep", temp.path().to_str().unwrap()]);
        run(args).await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "正文\n");
    }

    #[tokio::test]
    async fn test_run_invalid_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let args = CliArgs::parse_from(["mdsweep", missing.to_str().unwrap()]);
        let result = run(args).await;

        assert!(matches!(result, Err(Error::InvalidPath(_))));
    }
}
