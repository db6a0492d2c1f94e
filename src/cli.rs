//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use fcg::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = "fcg",
    version,
    about = "Request finder charts for telescope observations",
    long_about = None
)]
pub struct Cli {
    /// Finder chart server base URL (overrides the config file).
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the config file).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        let config = Config::load_from(&path)?;
        self.apply_overrides(config)
    }

    /// Applies flags on top of `config` and re-validates the result.
    pub fn apply_overrides(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        match self.verbose {
            0 => {}
            1 => config.log_level = "debug".to_string(),
            _ => config.log_level = "trace".to_string(),
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fcg").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = parse(&[]);
        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn server_flag_overrides() {
        let cli = parse(&["--server", "https://fcg.example.org"]);
        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config.server_url, "https://fcg.example.org");
    }

    #[test]
    fn invalid_server_flag_is_rejected() {
        let cli = parse(&["--server", "not a url"]);
        assert!(matches!(
            cli.apply_overrides(Config::default()),
            Err(ConfigError::InvalidServerUrl(_))
        ));
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(
            parse(&["-v"]).apply_overrides(Config::default()).unwrap().log_level,
            "debug"
        );
        assert_eq!(
            parse(&["-vv"]).apply_overrides(Config::default()).unwrap().log_level,
            "trace"
        );
    }

    #[test]
    fn resolve_reads_explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"server_url": "http://charts.local:9000"}"#).unwrap();
        let cli = parse(&[
            "--config",
            path.to_str().unwrap(),
            "--log-file",
            "/tmp/fcg-cli.log",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.server_url, "http://charts.local:9000");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/fcg-cli.log")));
    }
}
