use crate::reports;
use clap::{ArgGroup, Args};
use resonance::api;
use resonance::config::AnalysisConfig;
use resonance::error::{ResonanceError, RsResult};
use resonance::loader;
use resonance::model::{AnalysisMode, AnalysisRequest, Brand, BrandAnalyses, ResonanceResult};
use resonance::scorer::ResonanceScorer;
use resonance::source::{HeuristicMetricSource, StaticMetricSource};
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("input").required(true).args(["mentions", "readings"])))]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    #[arg(short, long)]
    pub brand: String,

    #[arg(short, long, default_value = "general")]
    pub industry: String,

    #[arg(long)]
    pub context: Option<String>,

    /// Mentions file (.csv with a `text` column, or one mention per line)
    #[arg(short, long)]
    pub mentions: Option<String>,

    /// JSON metric readings, e.g. a stored model response
    #[arg(short, long)]
    pub readings: Option<String>,

    /// Write the scored result as JSON for later comparison
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    result: &'a ResonanceResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    analyses: Option<&'a BrandAnalyses>,
}

pub fn run(args: &AnalyzeArgs, config: AnalysisConfig, json: bool) -> RsResult<()> {
    let brand = Brand::new(&args.brand, &args.industry);
    let scorer = ResonanceScorer::new()?;

    let mut request = AnalysisRequest::new(&args.brand, &args.industry);
    request.additional_context = args.context.clone();

    let (result, analyses) = if let Some(path) = &args.mentions {
        info!("📂 Loading mentions from: {}", path);
        let mentions = loader::load_mentions(path)?;
        request.mode = AnalysisMode::Hybrid;

        let source = HeuristicMetricSource::new(&mentions, &config);
        let result = api::analyze_brand(&scorer, &source, &request, brand.id)?;
        let analyses = api::build_brand_analyses(brand.id, source.report());
        (result, Some(analyses))
    } else if let Some(path) = &args.readings {
        info!("📂 Loading metric readings from: {}", path);
        let source = StaticMetricSource::load_from_file(path)?;
        (api::analyze_brand(&scorer, &source, &request, brand.id)?, None)
    } else {
        return Err(ResonanceError::Configuration(
            "Either --mentions or --readings is required".to_string(),
        ));
    };

    if let Some(path) = &args.output {
        fs::write(path, serde_json::to_string_pretty(&result)?)?;
        info!("💾 Result saved to: {}", path);
    }

    if json {
        let output = AnalyzeOutput {
            result: &result,
            analyses: analyses.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    reports::print_result(&result);
    if let Some(analyses) = &analyses {
        reports::print_analyses(analyses);
    }
    Ok(())
}
