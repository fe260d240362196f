// Command-line interface definitions and parsing for siteup

use crate::config::CliConfig;
use clap::{Parser, Subcommand};

/// Check if sites are up.
///
/// Reads one candidate URL per line from standard input, probes each valid
/// URL concurrently, and prints one status line per site to standard output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Core Options
    /// Concurrent probes (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Probe with GET requests instead of HEAD
    #[arg(long, help_heading = "Core Options")]
    pub get: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Carry parsed CLI arguments into the configuration merge
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        concurrency: cli.concurrency,
        use_get: cli.get,
        user_agent: cli.user_agent.clone(),
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["siteup"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.concurrency, None);
        assert!(!cli.get);
        assert_eq!(cli.user_agent, None);
        assert!(!cli.verbose);
        assert_eq!(cli.config, None);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "siteup",
            "--concurrency",
            "8",
            "--get",
            "--user-agent",
            "probe/1.0",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.concurrency, Some(8));
        assert!(cli.get);
        assert_eq!(cli.user_agent, Some("probe/1.0".to_string()));
        assert!(cli.verbose);
        assert_eq!(cli.config, Some("custom.toml".to_string()));
    }

    #[test]
    fn test_cli_rejects_non_numeric_concurrency() {
        let result = Cli::try_parse_from(["siteup", "--concurrency", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_completion_subcommand() {
        let cli = Cli::try_parse_from(["siteup", "completion-generate", "bash"]).unwrap();

        match cli.command {
            Some(Commands::CompletionGenerate { shell }) => {
                assert_eq!(shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected CompletionGenerate command"),
        }
    }

    #[test]
    fn test_cli_to_config_maps_all_fields() {
        let cli = Cli::try_parse_from([
            "siteup",
            "--concurrency",
            "3",
            "--get",
            "--user-agent",
            "probe/1.0",
            "-v",
            "--no-config",
        ])
        .unwrap();

        let cli_config = cli_to_config(&cli);

        assert_eq!(cli_config.concurrency, Some(3));
        assert!(cli_config.use_get);
        assert_eq!(cli_config.user_agent, Some("probe/1.0".to_string()));
        assert!(cli_config.verbose);
        assert_eq!(cli_config.config_file, None);
        assert!(cli_config.no_config);
    }
}
