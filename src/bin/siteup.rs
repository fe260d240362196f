use clap::{CommandFactory, Parser};
use siteup::config::Config;
use siteup::probe::{Checker, orchestrator};
use siteup::reporting::logging;
use siteup::ui::{Cli, Commands, cli_to_config, print_completions};

use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_siteup_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main probing logic extracted from main() for testing
pub async fn run_siteup_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false));

    let concurrency = config.effective_concurrency();
    logging::log_config_info(&config, concurrency);

    let checker = Arc::new(Checker::from_config(&config)?);

    let start_time = std::time::Instant::now();
    let report = orchestrator::run(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        checker,
        concurrency,
    )
    .await?;
    logging::log_run_complete(&report, start_time.elapsed().as_millis());

    // DOWN sites and invalid lines are findings, not failures.
    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &siteup::config::CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use siteup::config::CliConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_cli() -> Cli {
        Cli {
            command: None,
            concurrency: None,
            get: false,
            user_agent: None,
            verbose: false,
            config: None,
            no_config: true,
        }
    }

    #[test]
    fn test_handle_completion_commands__none() {
        let cli = create_test_cli();
        assert!(handle_completion_commands(&cli).is_none());
    }

    #[test]
    fn test_load_and_merge_config__no_config_flag_uses_defaults() {
        let cli_config = CliConfig {
            no_config: true,
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config).unwrap();

        assert_eq!(config.use_head_requests, Some(true));
        assert_eq!(config.concurrency, None);
    }

    #[test]
    fn test_load_and_merge_config__with_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"concurrency = 6\nuse_head_requests = false\n")?;

        let cli_config = CliConfig {
            config_file: Some(file.path().display().to_string()),
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config)?;

        assert_eq!(config.concurrency, Some(6));
        assert_eq!(config.use_head_requests, Some(false));
        Ok(())
    }

    #[test]
    fn test_load_and_merge_config__cli_wins_over_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"concurrency = 6\n")?;

        let cli_config = CliConfig {
            config_file: Some(file.path().display().to_string()),
            concurrency: Some(32),
            use_get: true,
            ..Default::default()
        };

        let config = load_and_merge_config(&cli_config)?;

        assert_eq!(config.concurrency, Some(32));
        assert_eq!(config.use_head_requests, Some(false));
        Ok(())
    }

    #[test]
    fn test_load_and_merge_config__missing_file_is_an_error() {
        let cli_config = CliConfig {
            config_file: Some("/nonexistent/siteup.toml".to_string()),
            ..Default::default()
        };

        assert!(load_and_merge_config(&cli_config).is_err());
    }

    #[test]
    fn test_load_and_merge_config__rejects_zero_concurrency_from_cli() {
        let cli_config = CliConfig {
            no_config: true,
            concurrency: Some(0),
            ..Default::default()
        };

        let result = load_and_merge_config(&cli_config);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("concurrency must be greater than 0")
        );
    }
}
