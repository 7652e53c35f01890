use cropwise_core::error::CropwiseError;
use cropwise_core::model::{OptimalRange, Parameter, SampleHeader};
use cropwise_core::status::{summarize, Status, StatusSummary};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;

use crate::output;

#[derive(Serialize)]
pub struct ParameterHealth {
    pub parameter: Parameter,
    pub value: Decimal,
    pub unit: String,
    pub optimal_range: OptimalRange,
    pub status: Status,
}

#[derive(Serialize)]
pub struct StatusReport<'a> {
    pub header: &'a SampleHeader,
    pub parameters: Vec<ParameterHealth>,
    pub summary: StatusSummary,
}

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), CropwiseError> {
    let parsed = super::load_input(&input_file)?;
    let sample = &parsed.sample;

    let report = StatusReport {
        header: &sample.header,
        parameters: sample
            .parameters
            .iter()
            .map(|p| ParameterHealth {
                parameter: p.parameter,
                value: p.value,
                unit: p.unit().to_string(),
                optimal_range: p.optimal_range(),
                status: p.status(),
            })
            .collect(),
        summary: summarize(&sample.parameters),
    };

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_status(&report),
    }

    Ok(())
}
