use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ledgamma::{CHeader, Config, TableGenerator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ledgamma")]
#[command(about = "Print the LED gamma correction table as a C header", long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,
    /// TOML file with [header] presentation settings
    #[arg(long)]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the header (default)
    Generate,
    /// Print the effective configuration as TOML
    Config,
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "ledgamma", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Config) => {
            let config = load_config(cli.config.as_deref())?;
            let text = config.to_toml().context("Failed to serialize configuration")?;
            print!("{}", text);
            Ok(())
        }
        Some(Commands::Generate) | None => {
            let config = load_config(cli.config.as_deref())?;
            run_generate(&config)
        }
    }
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path);
            Config::load_from_path(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Config::load().context("Failed to load configuration"),
    }
}

fn run_generate(config: &Config) -> Result<()> {
    let table = TableGenerator::new();
    let header = CHeader::new(&config.header, &table)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    header
        .write_to(&mut out)
        .context("Failed to write header to stdout")?;
    out.flush()?;

    tracing::info!(
        "Wrote {}[{}] guarded by {}",
        config.header.array_name,
        table.iter().len(),
        config.header.guard
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_generates() {
        let cli = Cli::try_parse_from(["ledgamma"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from(["ledgamma", "-v", "--config", "~/gamma.toml", "generate"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("~/gamma.toml"));
        assert!(matches!(cli.command, Some(Commands::Generate)));

        let cli = Cli::try_parse_from(["ledgamma", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completions { shell: Shell::Bash })));
    }
}
