use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Cli, Command};

fn main() {
    let cli = parse_cli(None, std::env::args_os());

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Command::Records(args) => commands::records::run(args),
        Command::Preview(args) => commands::preview::run(args),
        Command::Expr(args) => commands::expr::run(args),
        Command::Factories(args) => commands::factories::run(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Load the env file (`.env` by default) if present, then parse arguments.
/// Env-backed flags such as `--seed` read the environment during parsing.
fn parse_cli<I, T>(env_file: Option<&Path>, args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match env_file {
        Some(path) => {
            let _ = dotenvy::from_path(path);
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }
    Cli::parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_seed_reaches_parsed_args() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "MOCKSMITH_SEED=4242\n").unwrap();

        let cli = parse_cli(
            Some(&env_file),
            ["mocksmith", "preview", "--schema", "s.json"],
        );
        match cli.command {
            Command::Preview(args) => assert_eq!(args.seed, Some(4242)),
            other => panic!("Expected preview, got {:?}", other),
        }
    }
}
