use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use resonance::heuristics::Distribution;
use resonance::metrics::{Metric, MetricWeights};
use resonance::model::{BrandAnalyses, ComparisonResult, ResonanceResult};
use resonance::scorer::{ScoreCategory, ScoreSummary};
use std::str::FromStr;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn category_color(category: &str) -> Color {
    match ScoreCategory::from_str(category) {
        Ok(ScoreCategory::Iconic | ScoreCategory::Leading) => Color::Green,
        Ok(ScoreCategory::Strong | ScoreCategory::Established) => Color::Cyan,
        Ok(ScoreCategory::Developing | ScoreCategory::Emerging) => Color::Yellow,
        _ => Color::Red,
    }
}

fn print_headline(title: &str, score: f64, category: &str, description: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", score)).fg(Color::Cyan),
        Cell::new(category)
            .fg(category_color(category))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new(""), Cell::new(""), Cell::new(description)]);
    println!("\n{}", table);
}

pub fn print_score_summary(summary: &ScoreSummary, weights: &MetricWeights) {
    print_headline(
        "Resonance",
        summary.overall_score,
        &summary.category,
        &summary.category_description,
    );

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new(format!("Weight\n(Σ {:.2})", weights.total())),
        Cell::new("Contrib").fg(Color::Cyan),
        Cell::new("% Total"),
    ]);
    align_right(&mut table, 1..=4);

    for row in &summary.breakdown {
        table.add_row(vec![
            Cell::new(row.name.label()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", row.score)),
            Cell::new(format!("{:.2}", row.weight)),
            Cell::new(format!("{:.2}", row.contribution)).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", row.percentage_of_total)),
        ]);
    }
    println!("{}", table);
}

pub fn print_result(result: &ResonanceResult) {
    print_headline(
        &result.brand_name,
        result.overall_score,
        &result.category,
        &result.category_description,
    );

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Reasoning"),
        Cell::new("Key Insights"),
    ]);
    align_right(&mut table, 1..=1);

    for metric in Metric::iter() {
        if let Some(score) = result.metrics.get(&metric) {
            table.add_row(vec![
                Cell::new(metric.label()).add_attribute(Attribute::Bold),
                Cell::new(format!("{:.1}", score.score)).fg(Color::Cyan),
                Cell::new(&score.reasoning),
                Cell::new(score.key_insights.join("\n")),
            ]);
        }
    }
    println!("{}", table);
}

fn print_distribution(title: &str, distribution: &Distribution) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("%"),
    ]);
    align_right(&mut table, 1..=1);

    let dominant = distribution.dominant().map(|(label, _)| label.to_string());
    for (label, pct) in distribution.iter() {
        let mut cell = Cell::new(format!("{:.1}", pct));
        if dominant.as_deref() == Some(label) && pct > 0.0 {
            cell = cell.fg(Color::Green);
        }
        table.add_row(vec![Cell::new(label), cell]);
    }
    println!("{}", table);
}

pub fn print_analyses(analyses: &BrandAnalyses) {
    let mut topics = new_table();
    topics.set_header(vec![
        Cell::new("Topic").add_attribute(Attribute::Bold),
        Cell::new("Weight"),
        Cell::new("Words"),
    ]);
    align_right(&mut topics, 0..=1);
    for topic in &analyses.topics.topics {
        topics.add_row(vec![
            Cell::new(topic.id),
            Cell::new(format!("{:.3}", topic.weight)),
            Cell::new(topic.words.join(", ")),
        ]);
    }
    println!("\n{}", topics);

    print_distribution("Sentiment", &analyses.sentiment.distribution);
    print_distribution("Intent", &analyses.intent.categories);
    print_distribution("Region", &analyses.geographic.regions);
    print_distribution("Age Group", &analyses.demographic.mix.age_groups);
    print_distribution("Gender", &analyses.demographic.mix.gender);
    print_distribution("Income", &analyses.demographic.mix.income_levels);

    let advocacy = &analyses.advocacy.signals;
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Advocacy Strength").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", advocacy.strength)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Advocates"),
        Cell::new(format!("{:.1}%", advocacy.advocates_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Key Phrases"),
        Cell::new(advocacy.key_advocacy_phrases.join("\n")),
    ]);
    println!("{}", table);
}

pub fn print_comparison(comparison: &ComparisonResult) {
    let mut table = new_table();

    let mut header = vec![Cell::new("Metric").add_attribute(Attribute::Bold)];
    header.extend(
        comparison
            .brands
            .iter()
            .map(|b| Cell::new(b).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);
    align_right(&mut table, 1..=comparison.brands.len());

    let best = comparison
        .overall_scores
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let mut overall = vec![Cell::new("Overall").fg(Color::Cyan)];
    overall.extend(comparison.brands.iter().map(|brand| {
        let score = comparison.overall_scores.get(brand).copied().unwrap_or(0.0);
        let cell = Cell::new(format!("{:.1}", score));
        if score >= best {
            cell.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }));
    table.add_row(overall);

    for metric in Metric::iter() {
        let Some(scores) = comparison.metric_scores.get(&metric) else {
            continue;
        };
        let mut row = vec![Cell::new(metric.label())];
        row.extend(comparison.brands.iter().map(|brand| match scores.get(brand) {
            Some(score) => Cell::new(format!("{:.1}", score)),
            None => Cell::new("-"),
        }));
        table.add_row(row);
    }
    println!("\n{}", table);
}
