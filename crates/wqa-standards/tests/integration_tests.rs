//! Integration tests for wqa-standards with the bundled reference database.
//!
//! These tests run whole batches through the engine, both against the
//! sample `data/database.json` and against small hand-built catalogs.

use wqa_core::{Limit, Measurement, Parameter, ReferenceCatalog, Standard};
use wqa_standards::{audit_catalog, evaluate, evaluate_traced, ItemOutcome, Status};

/// Path to the reference database relative to the workspace root
const DATABASE_PATH: &str = "data/database.json";

fn database_path() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(DATABASE_PATH)
}

fn bundled_catalog() -> ReferenceCatalog {
    ReferenceCatalog::try_load(database_path()).unwrap()
}

fn ph_catalog() -> ReferenceCatalog {
    ReferenceCatalog::from_parameters(vec![Parameter::new("pH", "").with_standard(
        Standard::new("WHO", Limit::Between { min: 6.5, max: 8.5 })
            .with_remedy("Corrosion/irritation", "pH correction"),
    )])
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_ph_above_range_fails() {
    let report = evaluate(&[Measurement::new("pH", 9.0)], &ph_catalog());

    assert_eq!(report.total_count(), 1);
    let entry = &report.entries()[0];
    assert_eq!(entry.results().len(), 1);

    let result = &entry.results()[0];
    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.violation_text(), Some("> 8.5"));
    assert_eq!(result.consequence(), Some("Corrosion/irritation"));
    assert_eq!(result.solution(), Some("pH correction"));
    assert_eq!(result.limit_display, "6.5-8.5");
    assert!(!entry.is_safe());
}

#[test]
fn test_ph_in_range_passes() {
    let report = evaluate(&[Measurement::new("pH", 7.0)], &ph_catalog());

    let entry = &report.entries()[0];
    assert_eq!(entry.results()[0].status, Status::Pass);
    assert!(entry.is_safe());
    assert_eq!(report.safe_count(), 1);
}

#[test]
fn test_unknown_parameter_contributes_nothing() {
    let catalog = ph_catalog();
    let without = evaluate(&[Measurement::new("pH", 7.0)], &catalog);
    let with = evaluate(&[Measurement::new("pH", 7.0), Measurement::new("Lead", 0.05)], &catalog);

    assert_eq!(without.total_count(), with.total_count());
    assert_eq!(without, with);
}

#[test]
fn test_empty_batch() {
    let report = evaluate(&[], &bundled_catalog());
    assert_eq!(report.total_count(), 0);
    assert!(report.is_empty());
}

#[test]
fn test_unavailable_catalog_yields_empty_report() {
    let catalog = ReferenceCatalog::load("no/such/database.json");
    let batch: Vec<_> = (0..25).map(|i| Measurement::new("pH", i as f64)).collect();

    let report = evaluate(&batch, &catalog);
    assert_eq!(report.total_count(), 0);
    assert_eq!(report.safe_count() + report.unsafe_count(), 0);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_informational_parameter_is_safe() {
    let catalog = bundled_catalog();
    for value in [-40.0, 0.0, 25.0, 99.9] {
        let report = evaluate(&[Measurement::new("Temperature", value)], &catalog);
        let entry = &report.entries()[0];

        assert!(entry.results().iter().all(|r| r.status == Status::Info));
        assert!(entry.is_safe());
        assert_eq!(report.safe_count(), 1);
    }
}

#[test]
fn test_above_max_uses_greater_than() {
    let catalog = bundled_catalog();
    let report = evaluate(&[Measurement::new("Nitrate", 62.5)], &catalog);

    for result in report.entries()[0].results() {
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.violation_text(), Some("> 50"));
        assert_eq!(result.limit_display, "Max 50");
    }
}

#[test]
fn test_below_min_uses_less_than() {
    let catalog = bundled_catalog();
    let report = evaluate(&[Measurement::new("Dissolved Oxygen", 3.2)], &catalog);

    let result = &report.entries()[0].results()[0];
    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.violation_text(), Some("< 5"));
    assert_eq!(result.limit_display, "5-None");
}

#[test]
fn test_min_violation_takes_precedence() {
    let catalog = ReferenceCatalog::from_parameters(vec![Parameter::new("Odd", "mg/L")
        .with_standard(
            Standard::new("LAB", Limit::Between { min: 8.0, max: 2.0 }).with_remedy("c", "s"),
        )]);

    for value in [1.0, 5.0, 9.0] {
        let report = evaluate(&[Measurement::new("Odd", value)], &catalog);
        let result = &report.entries()[0].results()[0];
        if value < 8.0 {
            assert_eq!(result.violation_text(), Some("< 8"), "value {}", value);
        } else {
            assert_eq!(result.violation_text(), Some("> 2"), "value {}", value);
        }
    }
}

#[test]
fn test_counts_always_add_up() {
    let catalog = bundled_catalog();
    let batch = vec![
        Measurement::new("pH", 5.8),
        Measurement::new("Turbidity", 2.0),
        Measurement::new("Nitrate", 12.0),
        Measurement::new("Iron", 1.1),
        Measurement::new("Total Hardness", 320.0),
        Measurement::new("E. coli", 0.0),
        Measurement::new("Temperature", 24.0),
        Measurement::new("Lead", 0.02),
    ];

    let report = evaluate(&batch, &catalog);
    assert_eq!(report.total_count(), 7);
    assert_eq!(report.safe_count() + report.unsafe_count(), report.total_count());
    assert_eq!(report.unsafe_count(), 3); // pH, Iron, Total Hardness (NAFDAC)
}

#[test]
fn test_entries_follow_submission_order_and_keep_duplicates() {
    let catalog = bundled_catalog();
    let batch = vec![
        Measurement::new("Iron", 0.1),
        Measurement::new("pH", 7.1),
        Measurement::new("Iron", 0.5),
    ];

    let report = evaluate(&batch, &catalog);
    let names: Vec<_> = report.iter().map(|e| e.parameter_name()).collect();
    assert_eq!(names, vec!["Iron", "pH", "Iron"]);
    assert!(report.entries()[0].is_safe());
    assert!(!report.entries()[2].is_safe());
}

#[test]
fn test_results_follow_standard_order() {
    let catalog = bundled_catalog();
    let report = evaluate(&[Measurement::new("Total Hardness", 200.0)], &catalog);

    let statuses: Vec<_> = report.entries()[0]
        .results()
        .iter()
        .map(|r| (r.authority.as_str(), r.status))
        .collect();
    assert_eq!(statuses, vec![("WHO", Status::Pass), ("NAFDAC", Status::Fail)]);
}

// =============================================================================
// Trace and audit
// =============================================================================

#[test]
fn test_trace_surfaces_skipped_items() {
    let catalog = bundled_catalog();
    let trace = evaluate_traced(
        &[
            Measurement::new("Lead", 0.02),
            Measurement::new("pH", 7.0),
            Measurement::new("Iron", f64::INFINITY),
        ],
        &catalog,
    );

    assert_eq!(trace.report.total_count(), 1);
    assert_eq!(trace.outcomes.len(), 3);
    assert_eq!(trace.outcomes[1], ItemOutcome::Evaluated { report_index: 0 });
    assert_eq!(trace.unknown_parameters(), vec!["Lead"]);
    assert_eq!(trace.skipped_count(), 2);
}

#[test]
fn test_bundled_catalog_is_clean() {
    let catalog = bundled_catalog();
    assert!(audit_catalog(&catalog).is_empty());
    assert!(catalog.list_names().contains(&"pH".to_string()));
}

#[test]
fn test_report_json_shape() {
    let report = evaluate(&[Measurement::new("pH", 9.0)], &ph_catalog());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["entries"][0]["parameter_name"], "pH");
    assert_eq!(json["entries"][0]["results"][0]["status"], "FAIL");
    assert_eq!(json["entries"][0]["results"][0]["violation"]["text"], "> 8.5");
}
