use clap::Parser;
use ledger_bootstrap::cli::{Cli, Commands};
use ledger_bootstrap::Deployment;
use std::path::PathBuf;

#[test]
fn test_parse_init_defaults() {
    let cli = Cli::try_parse_from(["ledger-bootstrap", "init"]).unwrap();

    match cli.command {
        Commands::Init(args) => {
            assert!(!args.force);
            assert_eq!(args.path, PathBuf::from("."));
        }
        _ => panic!("Wrong command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_init_with_preset_and_force() {
    let cli = Cli::try_parse_from([
        "ledger-bootstrap",
        "init",
        "app",
        "--force",
        "--preset",
        "dablhello",
    ])
    .unwrap();

    assert_eq!(cli.preset, Some(Deployment::DablHello));
    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.path, PathBuf::from("app"));
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_preset_is_case_insensitive() {
    let cli = Cli::try_parse_from(["ledger-bootstrap", "show", "-p", "HelloCDM"]).unwrap();
    assert_eq!(cli.preset, Some(Deployment::HelloCdm));
}

#[test]
fn test_unknown_preset_is_rejected() {
    let result = Cli::try_parse_from(["ledger-bootstrap", "show", "--preset", "nope"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_show_with_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "ledger-bootstrap",
        "show",
        "--output",
        "config.json",
        "--reveal",
        "--json",
        "--config",
        "settings.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("settings.yaml")));
    match cli.command {
        Commands::Show(args) => {
            assert_eq!(args.output, Some(PathBuf::from("config.json")));
            assert!(args.reveal);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_inspect() {
    let cli = Cli::try_parse_from([
        "ledger-bootstrap",
        "inspect",
        "eyJhbGciOiJIUzI1NiJ9.e30.sig",
        "--secret",
        "other",
    ])
    .unwrap();

    match cli.command {
        Commands::Inspect(args) => {
            assert_eq!(args.token, "eyJhbGciOiJIUzI1NiJ9.e30.sig");
            assert_eq!(args.secret.as_deref(), Some("other"));
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_inspect_requires_token() {
    assert!(Cli::try_parse_from(["ledger-bootstrap", "inspect"]).is_err());
}

#[test]
fn test_parse_check_strict() {
    let cli = Cli::try_parse_from(["ledger-bootstrap", "-j", "check", "--strict"]).unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Check(args) => assert!(args.strict),
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_base_settings_follow_preset() {
    let cli = Cli::try_parse_from(["ledger-bootstrap", "check", "-p", "dablhello"]).unwrap();
    assert_eq!(cli.base_settings(), Deployment::DablHello.settings());

    temp_env::with_var_unset("LEDGER_PRESET", || {
        let cli = Cli::try_parse_from(["ledger-bootstrap", "check"]).unwrap();
        assert_eq!(cli.preset, None);
        assert_eq!(cli.base_settings(), ledger_bootstrap::Settings::default());
    });
}

#[test]
fn test_preset_from_environment() {
    temp_env::with_var("LEDGER_PRESET", Some("dablhello"), || {
        let cli = Cli::try_parse_from(["ledger-bootstrap", "show"]).unwrap();
        assert_eq!(cli.preset, Some(Deployment::DablHello));
    });
}
