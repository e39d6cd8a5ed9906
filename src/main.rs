use bps_data_checker::DataChecker;
use bps_data_checker::checker::DEFAULT_AGGREGATE_LIMIT;
use bps_data_checker::config::Config;
use bps_data_checker::persist::save_results;
use bps_data_checker::report::print_summary;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    let checker = DataChecker::from_config(&config);

    // Run the full availability check and persist the report
    let results = checker
        .check_all_data_availability(DEFAULT_AGGREGATE_LIMIT)
        .await;
    save_results(&results, None)?;

    print_summary(&results);

    Ok(())
}
