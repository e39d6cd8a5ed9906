//! Walkthrough of the checker API: single-category checks, an independent
//! checker for a second domain, and a full run saved to a fixed filename.

use bps_data_checker::DataChecker;
use bps_data_checker::config::Config;
use bps_data_checker::models::CheckResult;
use bps_data_checker::persist::save_results;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let checker = DataChecker::from_config(&config);

    println!("=== BPS DATA CHECKER USAGE EXAMPLES ===\n");

    println!("1. Static tables only:");
    let static_result = checker.check_static_tables(3).await;
    println!("   Status: {}", static_result.status());
    if let CheckResult::Success { total, sample, .. } = &static_result {
        println!("   Total: {} tables", total);
        let titles: Vec<String> = sample
            .iter()
            .filter_map(|row| row.get("title").and_then(|t| t.as_str()))
            .map(|title| format!("{}...", title.chars().take(50).collect::<String>()))
            .collect();
        println!("   Sample titles: {:?}", titles);
    }
    println!();

    println!("2. Publications:");
    let pub_result = checker.check_publications(2).await;
    println!("   Status: {}", pub_result.status());
    if let CheckResult::Success { total, sample, .. } = &pub_result {
        println!("   Total: {} publications", total);
        if let Some(first) = sample.first() {
            println!(
                "   Sample: {}",
                first.get("title").and_then(|t| t.as_str()).unwrap_or("N/A")
            );
        }
    }
    println!();

    println!("3. Independent checker for another domain:");
    let other = DataChecker::new(config.api_key.clone(), "1200", config.base_url.clone());
    let other_static = other.check_static_tables(1).await;
    if let Some(total) = other_static.total() {
        println!(
            "   Static tables in {}: {} tables",
            other.domain_name(),
            total
        );
    }
    println!();

    println!("4. Full availability check for {}:", checker.domain_name());
    let full_results = checker.check_all_data_availability(2).await;

    let filename = save_results(&full_results, Some("bps_availability_example.json"))?;
    println!("\n   Full results saved to: {}", filename);

    println!("\n=== DONE ===");
    Ok(())
}
