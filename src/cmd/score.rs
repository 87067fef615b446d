use crate::reports;
use clap::Args;
use resonance::error::RsResult;
use resonance::loader;
use resonance::scorer::ResonanceScorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// JSON object mapping each metric name to a 0-100 score
    #[arg(short, long)]
    pub metrics: String,
}

pub fn run(args: &ScoreArgs, json: bool) -> RsResult<()> {
    info!("📂 Loading metric scores from: {}", args.metrics);
    let metrics = loader::load_metric_set(&args.metrics)?;

    let scorer = ResonanceScorer::new()?;
    let summary = scorer.summarize(&metrics)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_score_summary(&summary, scorer.weights());
    }
    Ok(())
}
