use std::path::Path;

use clap::Parser;

use doc_guard::cli::Cli;
use doc_guard::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, PartialConfig, PathList,
};
use doc_guard::extractor::{DocExtractor, ManifestExtractor};
use doc_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, ReportOutput, TextFormatter,
};
use doc_guard::pipeline::{self, RunResult};
use doc_guard::rules::{RuleId, RuleRegistry};
use doc_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_rules {
        for id in RuleId::ALL {
            println!("{id}");
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let exit_code = match run_check(&cli) {
        Ok(result) if result.is_success() => EXIT_SUCCESS,
        Ok(_) => EXIT_THRESHOLD_EXCEEDED,
        Err(e) => {
            eprintln!("Error: [{}] {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = if verbose > 0 { "debug" } else { "warn" };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}

fn run_check(cli: &Cli) -> doc_guard::Result<RunResult> {
    // 1. Resolve the working directory once; discovery and globs start here
    let cwd = std::env::current_dir()?;

    // 2. Load the config file layer
    let file_layer = load_config(&cwd, cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &file_layer.source {
        log::debug!("Using configuration from {}", source.display());
    }

    // 3. Merge defaults, file and command-line overrides
    let config = Config::resolve([file_layer.layer, cli_overrides(cli)])?;

    // 4. Extract, evaluate and report
    let extractor = ManifestExtractor::new(&cwd);
    let formatter = select_formatter(cli.format, cli.color.into());

    if cli.quiet && matches!(config.output(), ReportOutput::Stdout) {
        let documents = extractor.extract(config.path())?;
        return Ok(pipeline::evaluate(&documents, &RuleRegistry::builtin(), &config));
    }
    pipeline::run(&config, &extractor, formatter.as_ref())
}

fn load_config(
    cwd: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> doc_guard::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::default());
    }

    let loader = FileConfigLoader::new(cwd);
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn cli_overrides(cli: &Cli) -> PartialConfig {
    PartialConfig {
        threshold: cli.threshold,
        require_exact_threshold: cli.exact_override(),
        verbose: (cli.verbose > 0).then_some(true),
        path: (!cli.paths.is_empty()).then(|| PathList::Many(cli.paths.clone())),
        output: cli
            .output
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
        rules: None,
    }
}

fn select_formatter(format: OutputFormat, color: ColorMode) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
