use cropwise_core::error::CropwiseError;
use cropwise_core::model::{SampleHeader, Season};
use cropwise_core::parsing::ParseWarning;
use cropwise_core::score::ScoredCrop;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::output;

#[derive(Serialize)]
struct RecommendReport<'a> {
    header: &'a SampleHeader,
    season: Season,
    recommendations: &'a [ScoredCrop],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: &'a Vec<ParseWarning>,
}

pub fn run(
    config: &AppConfig,
    input_file: PathBuf,
    season: Option<String>,
    catalog_files: Vec<PathBuf>,
    output_format: &str,
    verbose: bool,
) -> Result<(), CropwiseError> {
    let engine = config.engine()?;
    let season = super::resolve_season(season.as_deref(), &engine)?;
    let catalog = super::load_catalog(&catalog_files)?;
    let parsed = super::load_input(&input_file)?;

    let recommendations =
        cropwise_core::compute_recommendations(&parsed.sample.parameters, season, &catalog);

    match output_format {
        "json" => output::json::print(&RecommendReport {
            header: &parsed.sample.header,
            season,
            recommendations: &recommendations,
            warnings: &parsed.warnings,
        })?,
        _ => output::table::print_recommendations(
            &parsed.sample.header,
            season,
            &recommendations,
            verbose,
        ),
    }

    Ok(())
}
