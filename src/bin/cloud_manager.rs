//=========================================================================
// Cloud Resource Manager
//=========================================================================
//
// Usage: cloud-manager [--quick] [--seed <u64>]
//
//   --quick       skip the prologue, instructions and credits screens
//   --seed <n>    fixed seed for resource and hazard placement
//
// Log level comes from RUST_LOG (default `info`).
//
//=========================================================================

use std::process::ExitCode;

use aetheric_arcade::games::cloud::{CloudConfig, CloudGame};
use aetheric_arcade::EngineBuilder;
use log::{error, info};
use tracing_subscriber::EnvFilter;

const TITLE: &str = "Cloud Resource Manager";

fn main() -> ExitCode {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: cloud-manager [--quick] [--seed <u64>]");
            return ExitCode::FAILURE;
        }
    };

    info!("Starting {} (story: {}, seed: {:?})", TITLE, config.story, config.seed);

    let engine = EngineBuilder::new()
        .with_title(TITLE)
        .build(CloudGame::new(config));

    match engine.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .compact()
        .init();
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CloudConfig, String> {
    let mut config = CloudConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--quick" => config.story = false,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed {value:?}"))?;
                config.seed = Some(seed);
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

    fn parse(args: &[&str]) -> Result<CloudConfig, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_keeps_defaults() {
        assert_eq!(parse(&[]), Ok(CloudConfig::default()));
    }

    #[test]
    fn quick_turns_story_off() {
        let config = parse(&["--quick"]).unwrap();
        assert!(!config.story);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seed_and_quick_combine() {
        let config = parse(&["--seed", "42", "--quick"]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(!config.story);
    }

    #[test]
    fn seed_without_value_is_rejected() {
        assert_eq!(parse(&["--seed"]), Err("--seed needs a value".to_string()));
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        assert!(parse(&["--seed", "abc"]).unwrap_err().contains("invalid seed"));
        assert!(parse(&["--seed", "-1"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse(&["--fast"]).unwrap_err().contains("unknown argument"));
    }
}
