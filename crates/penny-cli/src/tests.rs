//! CLI tests

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands;

#[test]
fn test_parse_summary() {
    let cli = Cli::try_parse_from(["penny", "summary"]).unwrap();
    assert!(matches!(cli.command, Commands::Summary));
    assert!(cli.config.is_none());
    assert!(cli.ledger.is_none());
}

#[test]
fn test_parse_afford_with_goal() {
    let cli = Cli::try_parse_from(["penny", "afford", "250", "--goal", "1500"]).unwrap();
    match cli.command {
        Commands::Afford { amount, goal } => {
            assert_eq!(amount, 250.0);
            assert_eq!(goal, Some(1500.0));
        }
        _ => panic!("expected afford command"),
    }
}

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["penny", "serve"]).unwrap();
    match cli.command {
        Commands::Serve { port, host, allow_origin } => {
            assert_eq!(port, 3000);
            assert_eq!(host, "127.0.0.1");
            assert!(allow_origin.is_empty());
        }
        _ => panic!("expected serve command"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli =
        Cli::try_parse_from(["penny", "categories", "--limit", "5", "--config", "b.toml"]).unwrap();
    assert_eq!(cli.config.as_deref().unwrap().to_str().unwrap(), "b.toml");
    match cli.command {
        Commands::Categories { limit } => assert_eq!(limit, Some(5)),
        _ => panic!("expected categories command"),
    }
}

#[test]
fn test_parse_rejects_missing_amount() {
    assert!(Cli::try_parse_from(["penny", "afford"]).is_err());
}

#[test]
fn test_commands_run_on_demo_data() {
    let month = commands::load_month(None, None).unwrap();

    assert!(commands::cmd_summary(&month).is_ok());
    assert!(commands::cmd_categories(&month, Some(3)).is_ok());
    assert!(commands::cmd_target(&month, Some(20.0)).is_ok());
    assert!(commands::cmd_suggest(&month).is_ok());
    assert!(commands::cmd_afford(&month, 300.0, None).is_ok());
    assert!(commands::cmd_weekly(&month, "Dining").is_ok());
    assert!(commands::cmd_projection(&month).is_ok());
    assert!(commands::cmd_prompt(&month).is_ok());
}

#[test]
fn test_target_rejects_out_of_range_percentage() {
    let month = commands::load_month(None, None).unwrap();
    assert!(commands::cmd_target(&month, Some(0.0)).is_err());
    assert!(commands::cmd_target(&month, Some(150.0)).is_err());
}

#[test]
fn test_afford_rejects_non_positive_amount() {
    let month = commands::load_month(None, None).unwrap();
    assert!(commands::cmd_afford(&month, 0.0, None).is_err());
    assert!(commands::cmd_afford(&month, f64::NAN, None).is_err());
}
