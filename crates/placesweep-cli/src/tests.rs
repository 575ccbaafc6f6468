use super::*;

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["placesweep-cli"]).is_err());
}

#[test]
fn parses_discover_with_defaults() {
    let cli =
        Cli::try_parse_from(["placesweep-cli", "discover"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Discover {
            plan: None,
            max_results: None,
            ref output,
        } if output == &PathBuf::from("place_ids.txt")
    ));
}

#[test]
fn parses_discover_overrides() {
    let cli = Cli::try_parse_from([
        "placesweep-cli",
        "discover",
        "--plan",
        "plans/douala.yaml",
        "--max-results",
        "50",
        "--output",
        "ids.txt",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Discover {
            plan: Some(ref plan),
            max_results: Some(50),
            ref output,
        } if plan == &PathBuf::from("plans/douala.yaml") && output == &PathBuf::from("ids.txt")
    ));
}

#[test]
fn discover_rejects_non_numeric_cap() {
    let result = Cli::try_parse_from(["placesweep-cli", "discover", "--max-results", "lots"]);
    assert!(result.is_err());
}

#[test]
fn details_requires_input() {
    assert!(Cli::try_parse_from(["placesweep-cli", "details"]).is_err());
}

#[test]
fn parses_details_with_defaults() {
    let cli = Cli::try_parse_from(["placesweep-cli", "details", "--input", "place_ids.txt"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Details {
            ref input,
            ref output,
            no_coordinates: false,
        } if input == &PathBuf::from("place_ids.txt") && output == &PathBuf::from("places.csv")
    ));
}

#[test]
fn parses_details_without_coordinates() {
    let cli = Cli::try_parse_from([
        "placesweep-cli",
        "details",
        "--input",
        "ids.txt",
        "--no-coordinates",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Details {
            no_coordinates: true,
            ..
        }
    ));
}

#[test]
fn parses_run_with_ids_output() {
    let cli = Cli::try_parse_from(["placesweep-cli", "run", "--ids-output", "ids.txt"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Run {
            plan: None,
            ids_output: Some(ref ids),
            ref output,
            ..
        } if ids == &PathBuf::from("ids.txt") && output == &PathBuf::from("places.csv")
    ));
}

#[test]
fn parses_plan_with_explicit_path() {
    let cli = Cli::try_parse_from(["placesweep-cli", "plan", "--plan", "custom.yaml"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Plan { ref plan, init: false } if plan == &PathBuf::from("custom.yaml")
    ));
}

#[test]
fn parses_plan_init() {
    let cli = Cli::try_parse_from(["placesweep-cli", "plan", "--init"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Plan { init: true, .. }));
}

fn test_config() -> AppConfig {
    AppConfig {
        api_key: "k".to_string(),
        api_base_url: "http://localhost/".to_string(),
        log_level: "info".to_string(),
        plan_path: PathBuf::from(DEFAULT_PLAN_PATH),
        request_timeout_secs: 30,
        user_agent: "test".to_string(),
        page_token_delay_ms: 3000,
        detail_delay_ms: 200,
        max_results: 300,
        language: "en".to_string(),
        include_coordinates: true,
    }
}

#[test]
fn search_limits_prefers_flag_over_config() {
    let config = test_config();
    assert_eq!(search_limits(&config, None).max_results, 300);
    assert_eq!(search_limits(&config, Some(25)).max_results, 25);
    assert_eq!(
        search_limits(&config, None).page_token_delay,
        Duration::from_secs(3)
    );
}

#[test]
fn no_coordinates_flag_overrides_config() {
    let config = test_config();
    assert!(detail_options(&config, false).include_coordinates);
    assert!(!detail_options(&config, true).include_coordinates);

    let config = AppConfig {
        include_coordinates: false,
        ..test_config()
    };
    assert!(!detail_options(&config, false).include_coordinates);
}

#[test]
fn build_client_rejects_bad_base_url() {
    let config = AppConfig {
        api_base_url: "not a url".to_string(),
        ..test_config()
    };
    assert!(build_client(&config).is_err());
}
