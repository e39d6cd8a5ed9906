use std::fs;

use serde_json::json;

use bps_data_checker::models::{AggregateResult, CategoryCheck, CheckResult, now_stamp};
use bps_data_checker::persist::save_results;
use bps_data_checker::Category;

fn sample_aggregate() -> AggregateResult {
    let entries = Category::ALL
        .iter()
        .map(|&category| CategoryCheck {
            category,
            result: if category == Category::Infographics {
                CheckResult::failed("HTTP status error: 500 Internal Server Error")
            } else {
                CheckResult::success(
                    2,
                    vec![json!({"title": "Indeks Pembangunan Manusia"})],
                    (!category.uses_table_catalog()).then(|| json!({"data": [{"page": 1}]})),
                )
            },
        })
        .collect();

    AggregateResult {
        domain: "7500".to_string(),
        domain_name: "Gorontalo".to_string(),
        check_timestamp: now_stamp(),
        data_availability: entries,
    }
}

#[test]
fn written_file_round_trips_to_the_same_aggregate() {
    let results = sample_aggregate();
    let path = std::env::temp_dir().join("bps_checker_roundtrip.json");
    let path_str = path.to_str().unwrap();

    let filename = save_results(&results, Some(path_str)).unwrap();
    assert_eq!(filename, path_str);

    let contents = fs::read_to_string(&path).unwrap();
    let parsed: AggregateResult = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, results);

    // Non-ASCII stays verbatim, and the category-specific keys are on disk.
    assert!(contents.contains("Indeks Pembangunan Manusia"));
    assert!(contents.contains("total_tables"));
    assert!(contents.contains("sample_press_releases"));

    let _ = fs::remove_file(&path);
}

#[test]
fn default_filename_derives_from_domain_and_timestamp() {
    let results = sample_aggregate();

    let filename = save_results(&results, None).unwrap();
    assert!(filename.starts_with("bps_data_availability_7500_"));
    assert!(filename.ends_with(".json"));
    assert!(fs::metadata(&filename).is_ok());

    let _ = fs::remove_file(&filename);
}
