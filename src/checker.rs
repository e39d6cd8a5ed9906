use serde_json::Value;

use crate::category::Category;
use crate::client::BpsClient;
use crate::config::{Config, domain_name};
use crate::error::Result;
use crate::models::{AggregateResult, CategoryCheck, CheckResult, now_stamp};

/// Sample limit used by the single-category entry points.
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;
/// Per-category sample limit used by the aggregate check.
pub const DEFAULT_AGGREGATE_LIMIT: usize = 5;

/// Checks the availability of BPS content categories for one domain.
pub struct DataChecker {
    client: BpsClient,
    domain: String,
    domain_name: String,
}

impl DataChecker {
    pub fn new(
        api_key: impl Into<String>,
        domain: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let domain = domain.into();
        DataChecker {
            client: BpsClient::new(api_key, domain.clone(), base_url),
            domain_name: domain_name(&domain),
            domain,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.domain.clone(),
            config.base_url.clone(),
        )
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub async fn check_static_tables(&self, limit: usize) -> CheckResult {
        self.check_category(Category::StaticTables, limit).await
    }

    pub async fn check_dynamic_tables(&self, limit: usize) -> CheckResult {
        self.check_category(Category::DynamicTables, limit).await
    }

    pub async fn check_subjects(&self, limit: usize) -> CheckResult {
        self.check_category(Category::Subjects, limit).await
    }

    pub async fn check_publications(&self, limit: usize) -> CheckResult {
        self.check_category(Category::Publications, limit).await
    }

    pub async fn check_press_releases(&self, limit: usize) -> CheckResult {
        self.check_category(Category::PressReleases, limit).await
    }

    pub async fn check_strategic_indicators(&self, limit: usize) -> CheckResult {
        self.check_category(Category::StrategicIndicators, limit).await
    }

    pub async fn check_news(&self, limit: usize) -> CheckResult {
        self.check_category(Category::News, limit).await
    }

    pub async fn check_infographics(&self, limit: usize) -> CheckResult {
        self.check_category(Category::Infographics, limit).await
    }

    /// Runs the check for one category. Any upstream failure is recorded in
    /// the result instead of propagating; there are no retries.
    pub async fn check_category(&self, category: Category, limit: usize) -> CheckResult {
        println!(
            "[CHECKING] Checking {} for domain {}...",
            category.title(),
            self.domain
        );

        match self.fetch_category(category, limit).await {
            Ok(result) => result,
            Err(err) => {
                println!(
                    "[ERROR] Error checking {}: {}",
                    category.title().to_lowercase(),
                    err
                );
                CheckResult::failed(err.to_string())
            }
        }
    }

    async fn fetch_category(&self, category: Category, limit: usize) -> Result<CheckResult> {
        // Table categories go through the catalog call and keep no raw
        // envelope; everything else uses the plain list endpoint.
        let (items, api_response) = if category.uses_table_catalog() {
            let catalog = self.client.table_catalog(category.model()).await?;
            (catalog.rows, None)
        } else {
            let page = self.client.list(category.model()).await?;
            (page.items, Some(page.raw))
        };

        let total = items.len();
        let sample: Vec<Value> = items.into_iter().take(limit).collect();

        println!("[SUCCESS] Found {} {}", total, category.title());
        Ok(CheckResult::success(total, sample, api_response))
    }

    /// Checks all eight categories strictly one after another, in the fixed
    /// order. A failed category never aborts the run; the aggregate always
    /// contains one entry per category.
    pub async fn check_all_data_availability(&self, limit_per_category: usize) -> AggregateResult {
        println!(
            "[START] Checking BPS data availability for domain {} ({})",
            self.domain_name, self.domain
        );
        println!("{}", "=".repeat(70));

        let check_timestamp = now_stamp();
        let mut entries = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let result = self.check_category(category, limit_per_category).await;
            match &result {
                CheckResult::Success { .. } => {
                    println!("[DATA] {}: [SUCCESS] Available", category.title());
                }
                CheckResult::Error { error, .. } => {
                    println!("[DATA] {}: [ERROR] Error - {}", category.title(), error);
                }
            }
            entries.push(CategoryCheck { category, result });
        }

        println!("\n{}", "=".repeat(70));
        println!("[SUCCESS] Check complete!");

        AggregateResult {
            domain: self.domain.clone(),
            domain_name: self.domain_name.clone(),
            check_timestamp,
            data_availability: entries,
        }
    }
}
