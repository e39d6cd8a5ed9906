use std::fs;
use std::io;

use chrono::Local;

use crate::models::AggregateResult;

/// Writes the aggregate result as pretty-printed UTF-8 JSON (non-ASCII
/// verbatim) and returns the filename used. Filesystem and serialization
/// errors propagate to the caller.
pub fn save_results(results: &AggregateResult, filename: Option<&str>) -> io::Result<String> {
    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            format!(
                "bps_data_availability_{}_{}.json",
                results.domain, timestamp
            )
        }
    };

    let json = serde_json::to_string_pretty(results)?;
    fs::write(&filename, json)?;

    println!("[SAVE] Results saved to: {}", filename);
    Ok(filename)
}
