//! Path resolution for the config file, data directory, and data files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, TrackerConfig};
use crate::errors::CliError;
use crate::helpers::ensure_csv_extension;

/// Resolve the config file path, checking FINTRACK_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("FINTRACK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// `--data-dir` (or its env var) wins over the config file.
pub fn resolve_data_dir(cli: &Cli, config: &TrackerConfig) -> PathBuf {
    match cli.data_dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(&config.storage.data_dir),
    }
}

/// Data file to load: `--file`, else the configured default.
pub fn resolve_source_file(cli: &Cli, config: &TrackerConfig) -> Option<String> {
    cli.file
        .as_deref()
        .or(config.storage.default_file.as_deref())
        .filter(|name| !name.trim().is_empty())
        .map(ensure_csv_extension)
}

/// File a mutating command writes to: `--save`, else the loaded source file.
pub fn resolve_destination(
    save: Option<&str>,
    cli: &Cli,
    config: &TrackerConfig,
) -> anyhow::Result<String> {
    if let Some(name) = save.filter(|name| !name.trim().is_empty()) {
        return Ok(ensure_csv_extension(name));
    }
    resolve_source_file(cli, config).ok_or_else(|| {
        CliError::not_found(
            "No file to save the ledger to",
            "Pass --save <NAME> or --file <NAME>, or set storage.default_file in the config.",
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["fintrack"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_data_dir_flag_overrides_config() {
        let config = TrackerConfig::default();
        assert_eq!(resolve_data_dir(&parse(&["list"]), &config), PathBuf::from("files"));
        assert_eq!(
            resolve_data_dir(&parse(&["--data-dir", "/tmp/money", "list"]), &config),
            PathBuf::from("/tmp/money")
        );
    }

    #[test]
    fn test_source_file_falls_back_to_config() {
        let mut config = TrackerConfig::default();
        assert_eq!(resolve_source_file(&parse(&["list"]), &config), None);

        config.storage.default_file = Some("main".to_string());
        assert_eq!(
            resolve_source_file(&parse(&["list"]), &config).as_deref(),
            Some("main.csv")
        );
        assert_eq!(
            resolve_source_file(&parse(&["-f", "other.csv", "list"]), &config).as_deref(),
            Some("other.csv")
        );
    }

    #[test]
    fn test_destination_prefers_save() {
        let config = TrackerConfig::default();
        let cli = parse(&["-f", "data.csv", "delete", "0"]);
        assert_eq!(resolve_destination(Some("copy"), &cli, &config).unwrap(), "copy.csv");
        assert_eq!(resolve_destination(None, &cli, &config).unwrap(), "data.csv");
    }

    #[test]
    fn test_destination_missing_is_not_found() {
        let config = TrackerConfig::default();
        let err = resolve_destination(None, &parse(&["delete", "0"]), &config).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::NotFound { .. })));
    }
}
