use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["doc-guard"]);
    assert!(cli.paths.is_empty());
    assert!(cli.config.is_none());
    assert!(!cli.no_config);
    assert_eq!(cli.threshold, None);
    assert_eq!(cli.exact_override(), None);
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.list_rules);
}

#[test]
fn cli_with_paths() {
    let cli = Cli::parse_from(["doc-guard", "lib/a.json", "lib/**/*.json"]);
    assert_eq!(cli.paths, ["lib/a.json", "lib/**/*.json"]);
}

#[test]
fn cli_with_config() {
    let cli = Cli::parse_from(["doc-guard", "--config", "custom.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_config_conflicts_with_no_config() {
    let result = Cli::try_parse_from(["doc-guard", "--config", "a.toml", "--no-config"]);
    assert!(result.is_err());
}

#[test]
fn cli_threshold_in_range() {
    let cli = Cli::parse_from(["doc-guard", "--threshold", "95"]);
    assert_eq!(cli.threshold, Some(95));

    assert!(Cli::try_parse_from(["doc-guard", "--threshold", "101"]).is_err());
    assert!(Cli::try_parse_from(["doc-guard", "--threshold", "-1"]).is_err());
}

#[test]
fn cli_exact_flags() {
    assert_eq!(
        Cli::parse_from(["doc-guard", "--exact"]).exact_override(),
        Some(true)
    );
    assert_eq!(
        Cli::parse_from(["doc-guard", "--no-exact"]).exact_override(),
        Some(false)
    );
    assert!(Cli::try_parse_from(["doc-guard", "--exact", "--no-exact"]).is_err());
}

#[test]
fn cli_format_json() {
    let cli = Cli::parse_from(["doc-guard", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn cli_invalid_format_is_rejected() {
    assert!(Cli::try_parse_from(["doc-guard", "--format", "xml"]).is_err());
}

#[test]
fn cli_output_and_quiet() {
    let cli = Cli::parse_from(["doc-guard", "-o", "report.txt", "-q"]);
    assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
    assert!(cli.quiet);
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["doc-guard", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_color_never_maps_to_mode() {
    let cli = Cli::parse_from(["doc-guard", "--color", "never"]);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn cli_list_rules() {
    let cli = Cli::parse_from(["doc-guard", "--list-rules"]);
    assert!(cli.list_rules);
}
