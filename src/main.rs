use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use resonance::config::AnalysisConfig;
use resonance::error::RsResult;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with analysis parameters; explicit flags override it
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    /// Print machine-readable JSON instead of tables
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a JSON set of the five metric scores
    Score(cmd::score::ScoreArgs),
    /// Analyze a brand from mentions or stored metric readings
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Compare saved analysis results across brands
    Compare(cmd::compare::CompareArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// File config as the base, explicit analyze flags merged on top.
fn resolve_config(cli: &Cli, matches: &clap::ArgMatches) -> RsResult<AnalysisConfig> {
    let Commands::Analyze(args) = &cli.command else {
        return Ok(AnalysisConfig::default());
    };

    let Some(path) = &cli.config_file else {
        args.config.validate()?;
        return Ok(args.config.clone());
    };

    info!("⚙️  Loading analysis config from: {}", path);
    let mut config = AnalysisConfig::load_from_file(path)?;
    if let Some(sub_matches) = matches.subcommand_matches("analyze") {
        config.merge_from_cli(&args.config, sub_matches);
    }
    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let config = resolve_config(&cli, &matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let outcome = match &cli.command {
        Commands::Score(args) => cmd::score::run(args, cli.json),
        Commands::Analyze(args) => cmd::analyze::run(args, config, cli.json),
        Commands::Compare(args) => cmd::compare::run(args, cli.json),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
