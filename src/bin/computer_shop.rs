//=========================================================================
// Isaias' Computer Shop
//=========================================================================
//
// Usage: computer-shop [--seed <u64>]
//
//   --seed <n>    fixed seed for the part order of every shell
//
// Log level comes from RUST_LOG (default `info`).
//
//=========================================================================

use std::process::ExitCode;

use aetheric_arcade::games::assembly::{AssemblyConfig, AssemblyGame, TITLE};
use aetheric_arcade::EngineBuilder;
use log::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: computer-shop [--seed <u64>]");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting {} ({} shells, seed: {:?})", TITLE, config.shell_count, config.seed);

    let engine = EngineBuilder::new()
        .with_title(TITLE)
        .build(AssemblyGame::new(config));

    if let Err(e) = engine.run() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .compact()
        .init();
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<AssemblyConfig, String> {
    let mut config = AssemblyConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                config.seed = Some(value.parse().map_err(|_| format!("invalid seed {value:?}"))?);
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }

    Ok(config)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AssemblyConfig, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_keeps_defaults() {
        assert_eq!(parse(&[]), Ok(AssemblyConfig::default()));
    }

    #[test]
    fn seed_is_parsed() {
        let config = parse(&["--seed", "7"]).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.shell_count, 3);
    }

    #[test]
    fn seed_without_value_is_rejected() {
        assert_eq!(parse(&["--seed"]), Err("--seed needs a value".to_string()));
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        assert!(parse(&["--seed", "seven"]).unwrap_err().contains("invalid seed"));
    }

    #[test]
    fn quick_is_not_a_shop_flag() {
        assert!(parse(&["--quick"]).unwrap_err().contains("unknown argument"));
    }
}
