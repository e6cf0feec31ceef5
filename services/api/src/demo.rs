use clap::Args;
use std::io::ErrorKind;
use std::path::PathBuf;
use transparency_ai::error::AppError;
use transparency_ai::product::{ProductDisclosure, ProductProfile};
use transparency_ai::questions::QuestionCatalog;
use transparency_ai::scoring::{analyze, TransparencyScorer};

#[derive(Args, Debug)]
pub(crate) struct ScoreReportArgs {
    /// Path to a JSON file holding the declared product attributes
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Include the per-category sub-score breakdown in the output
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionPreviewArgs {
    /// Path to a JSON file holding the product profile
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_score_report(args: ScoreReportArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let data: ProductDisclosure = serde_json::from_str(&raw).map_err(invalid_input)?;

    let scorer = TransparencyScorer::new();
    let breakdown = scorer.breakdown(&data);
    let score = breakdown.total();
    let recommendations = scorer.recommend(&data, score);
    let analysis = analyze(score);

    println!("Transparency score: {score}/100");
    if args.breakdown {
        println!(
            "  basic_info: {}, detailed_composition: {}, certifications: {}, \
manufacturing_info: {}, sustainability: {}",
            breakdown.basic_info,
            breakdown.detailed_composition,
            breakdown.certifications,
            breakdown.manufacturing_info,
            breakdown.sustainability,
        );
    }

    let labels = serde_json::to_string(&analysis).map_err(invalid_input)?;
    println!("Analysis: {labels}");

    println!("Recommendations:");
    for (index, message) in recommendations.iter().enumerate() {
        println!("  {}. {message}", index + 1);
    }

    Ok(())
}

pub(crate) fn run_question_preview(args: QuestionPreviewArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let profile: ProductProfile = serde_json::from_str(&raw).map_err(invalid_input)?;

    // Offline preview: this is the exact batch the service falls back to when
    // the completion provider is unavailable.
    let questions = QuestionCatalog::new().fallback_questions(&profile);
    let rendered = serde_json::to_string_pretty(&questions).map_err(invalid_input)?;
    println!("{rendered}");

    Ok(())
}

fn invalid_input(err: serde_json::Error) -> AppError {
    AppError::Io(std::io::Error::new(ErrorKind::InvalidData, err))
}
