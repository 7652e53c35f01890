//! Integration tests for the recommendation and land planning pipeline.
//!
//! All tests run against the built-in season catalogs.

use cropwise_core::allocate::{total_allocated, LandPlan, PriceTable};
use cropwise_core::catalog::builtin::load_builtin;
use cropwise_core::config::{AutoSelectPolicy, EngineConfig};
use cropwise_core::error::CropwiseError;
use cropwise_core::model::{Parameter, Season, SoilParameter};
use cropwise_core::parsing::parse_sheet;
use cropwise_core::score::{select_top, Suitability};
use cropwise_core::status::{summarize, Status};
use cropwise_core::{auto_plan, compute_land_plan, compute_recommendations};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn balanced_kharif_soil() -> Vec<SoilParameter> {
    vec![
        SoilParameter::new(Parameter::Ph, dec!(6.5)),
        SoilParameter::new(Parameter::Nitrogen, dec!(300)),
        SoilParameter::new(Parameter::Phosphorus, dec!(20)),
        SoilParameter::new(Parameter::Potassium, dec!(200)),
        SoilParameter::new(Parameter::OrganicCarbon, dec!(0.6)),
        SoilParameter::new(Parameter::Moisture, dec!(35)),
    ]
}

const ALKALINE_SHEET: &str = "\
Sample ID: RB-0042
Village: Nandgaon
Date: 2024-10-28

Parameter               Value    Unit
pH (1:2.5)              8.2
Available Nitrogen      180      kg/ha
Available P             8        kg/ha
Potash                  100      kg/ha
EC                      3,0      dS/m
Calcium                 9        meq/100g
Zinc                    not tested
";

// ---------------------------------------------------------------------------
// Recommendations over a full season partition
// ---------------------------------------------------------------------------
#[test]
fn kharif_recommendations_cover_season_in_rank_order() {
    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&balanced_kharif_soil(), Season::Kharif, &catalog);

    assert_eq!(recs.len(), catalog.season(Season::Kharif).len());
    let ids: Vec<&str> = recs.iter().map(|r| r.id()).collect();
    // five crops tie at 100 and keep catalog order; millet is penalized for moisture
    assert_eq!(
        ids,
        vec!["rice", "maize", "cotton", "soybean", "groundnut", "pearl_millet"]
    );
    assert_eq!(recs[0].score, 100);
    assert_eq!(recs[5].score, 97);
    assert!(recs.iter().all(|r| r.suitability == Suitability::Excellent));

    let cotton = &recs[2];
    assert_eq!(
        cotton.unmatched_requirements,
        vec![Parameter::ElectricalConductivity]
    );
    assert!(recs[0].unmatched_requirements.is_empty());
    assert_eq!(recs[0].breakdown.len(), 6);
}

#[test]
fn recommendations_are_idempotent() {
    let catalog = load_builtin().unwrap();
    let soil = balanced_kharif_soil();
    let first = compute_recommendations(&soil, Season::Kharif, &catalog);
    let second = compute_recommendations(&soil, Season::Kharif, &catalog);

    let a: Vec<(&str, u8)> = first.iter().map(|r| (r.id(), r.score)).collect();
    let b: Vec<(&str, u8)> = second.iter().map(|r| (r.id(), r.score)).collect();
    assert_eq!(a, b);
}

#[test]
fn no_measurements_scores_every_crop_neutral() {
    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&[], Season::Zaid, &catalog);
    assert!(!recs.is_empty());
    for r in &recs {
        assert_eq!(r.score, 50);
        assert_eq!(r.suitability, Suitability::Fair);
        assert_eq!(r.unmatched_requirements.len(), r.crop.requirements.len());
    }
    // all tied, so catalog order is kept
    assert_eq!(recs[0].id(), catalog.season(Season::Zaid)[0].id);
}

#[test]
fn every_score_within_bounds_for_extreme_soil() {
    let catalog = load_builtin().unwrap();
    let soil = vec![
        SoilParameter::new(Parameter::Ph, dec!(14)),
        SoilParameter::new(Parameter::Nitrogen, dec!(0)),
        SoilParameter::new(Parameter::Phosphorus, dec!(999)),
        SoilParameter::new(Parameter::Potassium, dec!(-5)),
        SoilParameter::new(Parameter::Moisture, dec!(100)),
    ];
    for season in Season::ALL {
        for r in compute_recommendations(&soil, season, &catalog) {
            assert!(r.score <= 100, "{} scored {}", r.id(), r.score);
            assert_eq!(r.suitability, Suitability::from_score(r.score));
        }
    }
}

// ---------------------------------------------------------------------------
// Land allocation
// ---------------------------------------------------------------------------
#[test]
fn auto_plan_splits_land_between_top_four() {
    let catalog = load_builtin().unwrap();
    let config = EngineConfig::default();
    let plan = auto_plan(
        &balanced_kharif_soil(),
        Season::Kharif,
        dec!(10),
        &catalog,
        &config,
        &cropwise_core::allocate::CatalogPrices,
    )
    .unwrap();

    assert_eq!(plan.recommendations.len(), 6);
    let areas: Vec<(&str, Decimal)> = plan
        .allocation
        .iter()
        .map(|e| (e.crop_id.as_str(), e.area_acres))
        .collect();
    assert_eq!(
        areas,
        vec![
            ("rice", dec!(2.5)),
            ("maize", dec!(2.5)),
            ("cotton", dec!(2.5)),
            ("soybean", dec!(2.5)),
        ]
    );
    assert_eq!(total_allocated(&plan.allocation), dec!(10));

    // 2.5 acres of rice at 22 quintal/acre, 2183 per quintal
    let rice = &plan.allocation[0];
    assert_eq!(rice.percentage_of_total, dec!(25));
    assert_eq!(rice.estimated_yield, dec!(55));
    assert_eq!(rice.estimated_revenue, dec!(120065));
}

#[test]
fn auto_plan_with_strict_policy_allocates_nothing() {
    let catalog = load_builtin().unwrap();
    let config = EngineConfig {
        auto_select: AutoSelectPolicy {
            min_score: 100,
            max_crops: 4,
        },
        ..EngineConfig::default()
    };
    let plan = auto_plan(
        &balanced_kharif_soil(),
        Season::Kharif,
        dec!(10),
        &catalog,
        &config,
        &cropwise_core::allocate::CatalogPrices,
    )
    .unwrap();
    assert!(plan.allocation.is_empty());
    assert_eq!(plan.recommendations.len(), 6);
}

#[test]
fn land_plan_sums_exactly_for_awkward_areas() {
    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&balanced_kharif_soil(), Season::Kharif, &catalog);
    let selection = select_top(&recs, &AutoSelectPolicy::default());

    for total in [dec!(0), dec!(0.1), dec!(1), dec!(3.3), dec!(7), dec!(12.345), dec!(99.9)] {
        let entries = compute_land_plan(total, &selection).unwrap();
        assert_eq!(entries.len(), selection.len());
        assert_eq!(total_allocated(&entries), total, "total {total}");
        assert!(entries.iter().all(|e| e.area_acres >= Decimal::ZERO));
    }
}

#[test]
fn oversized_area_is_an_error() {
    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&balanced_kharif_soil(), Season::Kharif, &catalog);
    let err = compute_land_plan(Decimal::MAX / dec!(10), &recs[..2]).unwrap_err();
    assert!(matches!(err, CropwiseError::InvalidArea(_)));
}

#[test]
fn negative_area_rejected() {
    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&balanced_kharif_soil(), Season::Kharif, &catalog);
    let err = compute_land_plan(dec!(-1), &recs[..2]).unwrap_err();
    assert!(matches!(err, CropwiseError::InvalidArea(_)));
}

// ---------------------------------------------------------------------------
// Soil sheet through to a land plan
// ---------------------------------------------------------------------------
#[test]
fn sheet_to_rabi_plan() {
    let parsed = parse_sheet(ALKALINE_SHEET).unwrap();
    assert_eq!(parsed.sample.header.sample_id.as_deref(), Some("RB-0042"));
    assert_eq!(parsed.sample.parameters.len(), 5);
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].parameter, Parameter::Zinc);
    assert_eq!(parsed.skipped_lines.len(), 1);

    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&parsed.sample.parameters, Season::Rabi, &catalog);
    let ranked: Vec<(&str, u8)> = recs.iter().map(|r| (r.id(), r.score)).collect();
    assert_eq!(
        ranked,
        vec![
            ("barley", 95),
            ("mustard", 91),
            ("chickpea", 85),
            ("wheat", 75),
            ("lentil", 75),
            ("potato", 47),
        ]
    );
    assert_eq!(recs[2].suitability, Suitability::Excellent);
    assert_eq!(recs[5].suitability, Suitability::Poor);

    let selection = select_top(&recs, &AutoSelectPolicy::default());
    let entries = compute_land_plan(dec!(12), &selection).unwrap();
    let areas: Vec<Decimal> = entries.iter().map(|e| e.area_acres).collect();
    assert_eq!(areas, vec![dec!(3.3), dec!(3.2), dec!(2.9), dec!(2.6)]);
    assert_eq!(total_allocated(&entries), dec!(12));
}

#[test]
fn sheet_status_summary() {
    let parsed = parse_sheet(ALKALINE_SHEET).unwrap();
    let params = &parsed.sample.parameters;
    let ph = params.iter().find(|p| p.parameter == Parameter::Ph).unwrap();
    // above 7.5 but within the 30% band
    assert_eq!(ph.status(), Status::Low);

    let summary = summarize(params);
    assert_eq!(summary.optimal, 0);
    assert_eq!(summary.low, 3);
    // nitrogen 180 < 196 and EC 3.0 > 1.3
    assert_eq!(summary.deficient, 2);
    assert_eq!(summary.total(), params.len());
}

// ---------------------------------------------------------------------------
// Manual plan edits
// ---------------------------------------------------------------------------
#[test]
fn manual_plan_edits_keep_area_invariant() {
    let catalog = load_builtin().unwrap();
    let recs = compute_recommendations(&balanced_kharif_soil(), Season::Kharif, &catalog);
    let mut plan = LandPlan::from_allocation(dec!(10), &recs[..3]).unwrap();
    assert_eq!(plan.available_area(), dec!(0));

    // no room to grow until something shrinks
    assert!(matches!(
        plan.set_area("rice", dec!(4)),
        Err(CropwiseError::CapacityExceeded { .. })
    ));

    plan.remove_crop("cotton").unwrap();
    let freed = plan.available_area();
    assert!(freed > Decimal::ZERO);

    let groundnut = catalog.crop("groundnut").unwrap();
    let added = plan.add_crop(groundnut).unwrap();
    assert_eq!(added, freed * dec!(0.2));
    assert_eq!(plan.allocated_area() + plan.available_area(), dec!(10));

    let prices = PriceTable::new().with_price("groundnut", dec!(7000));
    let entries = plan.entries(&prices).unwrap();
    let g = entries.iter().find(|e| e.crop_id == "groundnut").unwrap();
    assert_eq!(g.estimated_revenue, added * dec!(8) * dec!(7000));
    assert!(total_allocated(&entries) <= plan.total_area());
}
