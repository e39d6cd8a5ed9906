use crate::models::{AggregateResult, CheckResult};

/// Prints the per-category availability summary. Presentational only.
pub fn print_summary(results: &AggregateResult) {
    println!(
        "\n[SUMMARY] BPS data availability for {}",
        results.domain_name
    );
    println!("{}", "=".repeat(50));

    for entry in &results.data_availability {
        match &entry.result {
            CheckResult::Success { total, .. } => {
                println!("[DATA] {}: {} items", entry.category.title(), total);
            }
            CheckResult::Error { error, .. } => {
                println!("[DATA] {}: Error - {}", entry.category.title(), error);
            }
        }
    }
}
