use cropwise_core::allocate::total_allocated;
use cropwise_core::model::{SampleHeader, Season};
use cropwise_core::score::ScoredCrop;
use cropwise_core::AutoPlan;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::commands::status::StatusReport;

pub fn print_recommendations(
    header: &SampleHeader,
    season: Season,
    recommendations: &[ScoredCrop],
    verbose: bool,
) {
    print_header(header);
    println!("=== {} season ({}) ===\n", season, season.months());

    if recommendations.is_empty() {
        println!("  No crops in the catalog for this season.\n");
        return;
    }

    let name_width = recommendations
        .iter()
        .map(|r| r.crop.name.len())
        .max()
        .unwrap_or(10)
        .max(4);

    println!(
        "  {:>2}  {:<width$}  {:>5}  {:<11}  {:<6}  Period",
        "#",
        "Crop",
        "Score",
        "Suitability",
        "Water",
        width = name_width
    );
    println!("  {}", "-".repeat(name_width + 46));

    for (i, r) in recommendations.iter().enumerate() {
        println!(
            "  {:>2}  {:<width$}  {:>5}  {:<11}  {:<6}  {}",
            i + 1,
            r.crop.name,
            r.score,
            r.suitability.to_string(),
            r.crop.water_need.to_string(),
            r.crop.growing_period,
            width = name_width
        );

        if verbose {
            for p in &r.breakdown {
                println!("        {}", p.reason());
            }
            if !r.unmatched_requirements.is_empty() {
                let names: Vec<String> =
                    r.unmatched_requirements.iter().map(|p| p.to_string()).collect();
                println!("        Not measured: {}", names.join(", "));
            }
            println!();
        }
    }
    println!();
}

pub fn print_plan(season: Season, total_area: Decimal, plan: &AutoPlan) {
    println!(
        "=== Land plan: {} acres, {} season ===\n",
        total_area, season
    );

    if plan.allocation.is_empty() {
        println!("  No crop qualified for allocation.\n");
        return;
    }

    let name_width = plan
        .allocation
        .iter()
        .map(|e| e.crop_name.len())
        .max()
        .unwrap_or(10)
        .max(4);

    println!(
        "  {:<width$}  {:>8}  {:>6}  {:>16}  {:>14}",
        "Crop",
        "Acres",
        "Share",
        "Yield",
        "Revenue",
        width = name_width
    );
    println!("  {}", "-".repeat(name_width + 52));

    let mut total_revenue = Decimal::ZERO;
    for e in &plan.allocation {
        total_revenue += e.estimated_revenue;
        let score = plan
            .recommendations
            .iter()
            .find(|r| r.id() == e.crop_id)
            .map(|r| format!("  (score {})", r.score))
            .unwrap_or_default();
        println!(
            "  {:<width$}  {:>8}  {:>5}%  {:>16}  {:>14}{}",
            e.crop_name,
            e.area_acres,
            round(e.percentage_of_total, 1),
            format!("{} {}", round(e.estimated_yield, 2), e.yield_unit),
            round(e.estimated_revenue, 2),
            score,
            width = name_width
        );
    }

    println!("  {}", "-".repeat(name_width + 52));
    println!(
        "  {:<width$}  {:>8}  {:>6}  {:>16}  {:>14}\n",
        "Total",
        total_allocated(&plan.allocation),
        "",
        "",
        round(total_revenue, 2),
        width = name_width
    );
}

pub fn print_status(report: &StatusReport) {
    print_header(report.header);

    let name_width = report
        .parameters
        .iter()
        .map(|p| p.parameter.to_string().len())
        .max()
        .unwrap_or(10)
        .max(9);

    println!(
        "  {:<width$}  {:>10}  {:<8}  {:<14}  Status",
        "Parameter",
        "Value",
        "Unit",
        "Optimal",
        width = name_width
    );
    println!("  {}", "-".repeat(name_width + 50));

    for p in &report.parameters {
        println!(
            "  {:<width$}  {:>10}  {:<8}  {:<14}  {}",
            p.parameter.to_string(),
            p.value,
            p.unit,
            p.optimal_range.to_string(),
            p.status,
            width = name_width
        );
    }

    let s = &report.summary;
    println!(
        "\n  {} optimal, {} low, {} deficient\n",
        s.optimal, s.low, s.deficient
    );
}

fn print_header(header: &SampleHeader) {
    let parts: Vec<String> = [
        header.sample_id.as_ref().map(|v| format!("Sample: {v}")),
        header.location.as_ref().map(|v| format!("Location: {v}")),
        header.date.as_ref().map(|v| format!("Date: {v}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !parts.is_empty() {
        println!("{}\n", parts.join("  |  "));
    }
}

/// Display rounding only; stored values keep full precision.
fn round(value: Decimal, dp: u32) -> Decimal {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
