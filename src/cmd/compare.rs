use crate::reports;
use clap::Args;
use resonance::api;
use resonance::error::RsResult;
use resonance::loader;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Saved result files, each holding one result or an array of results
    #[arg(required = true, num_args = 1..)]
    pub results: Vec<String>,
}

pub fn run(args: &CompareArgs, json: bool) -> RsResult<()> {
    let mut results = Vec::new();
    for path in &args.results {
        info!("📂 Loading results from: {}", path);
        results.extend(loader::load_results(path)?);
    }

    let comparison = api::compare_results(&results)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        reports::print_comparison(&comparison);
    }
    Ok(())
}
