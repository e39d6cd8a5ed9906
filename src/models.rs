use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::Category;
use crate::error::CheckError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Outcome of one per-category check, discriminated by `status` in JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    Success {
        total: usize,
        sample: Vec<Value>,
        api_response: Option<Value>,
        last_checked: String,
    },
    Error {
        error: String,
        last_checked: String,
    },
}

impl CheckResult {
    pub fn success(total: usize, sample: Vec<Value>, api_response: Option<Value>) -> Self {
        CheckResult::Success {
            total,
            sample,
            api_response,
            last_checked: now_stamp(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        CheckResult::Error {
            error: error.into(),
            last_checked: now_stamp(),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            CheckResult::Success { .. } => "success",
            CheckResult::Error { .. } => "error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success { .. })
    }

    pub fn total(&self) -> Option<usize> {
        match self {
            CheckResult::Success { total, .. } => Some(*total),
            CheckResult::Error { .. } => None,
        }
    }

    /// Encodes the result with the category-specific field names
    /// (`total_tables`, `sample_news`, ...).
    pub fn to_json(&self, category: Category) -> Value {
        let mut map = Map::new();
        match self {
            CheckResult::Success {
                total,
                sample,
                api_response,
                last_checked,
            } => {
                map.insert("status".to_string(), Value::from("success"));
                map.insert(category.total_field(), Value::from(*total as u64));
                map.insert(category.sample_field(), Value::Array(sample.clone()));
                if let Some(raw) = api_response {
                    map.insert("api_response".to_string(), raw.clone());
                }
                map.insert("last_checked".to_string(), Value::from(last_checked.clone()));
            }
            CheckResult::Error {
                error,
                last_checked,
            } => {
                map.insert("status".to_string(), Value::from("error"));
                map.insert("error".to_string(), Value::from(error.clone()));
                map.insert("last_checked".to_string(), Value::from(last_checked.clone()));
            }
        }
        Value::Object(map)
    }

    /// Inverse of [`to_json`](Self::to_json) for the same category.
    pub fn from_json(category: Category, value: &Value) -> Result<Self, CheckError> {
        let obj = value.as_object().ok_or_else(|| {
            CheckError::Shape(format!("entry for '{}' is not an object", category.key()))
        })?;

        let last_checked = obj
            .get("last_checked")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match obj.get("status").and_then(Value::as_str) {
            Some("success") => {
                let total = obj
                    .get(&category.total_field())
                    .and_then(Value::as_u64)
                    .ok_or_else(|| {
                        CheckError::Shape(format!("missing '{}'", category.total_field()))
                    })? as usize;
                let sample = obj
                    .get(&category.sample_field())
                    .and_then(Value::as_array)
                    .cloned()
                    .ok_or_else(|| {
                        CheckError::Shape(format!("missing '{}'", category.sample_field()))
                    })?;
                let api_response = obj.get("api_response").cloned();

                Ok(CheckResult::Success {
                    total,
                    sample,
                    api_response,
                    last_checked,
                })
            }
            Some("error") => {
                let error = obj
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();
                Ok(CheckResult::Error {
                    error,
                    last_checked,
                })
            }
            _ => Err(CheckError::Shape(format!(
                "entry for '{}' has no valid 'status' discriminator",
                category.key()
            ))),
        }
    }
}

/// One entry of the aggregate result.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCheck {
    pub category: Category,
    pub result: CheckResult,
}

/// Full availability report for one domain. Always carries exactly one
/// entry per category, in the fixed aggregate order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawAggregate", try_from = "RawAggregate")]
pub struct AggregateResult {
    pub domain: String,
    pub domain_name: String,
    pub check_timestamp: String,
    pub data_availability: Vec<CategoryCheck>,
}

impl AggregateResult {
    pub fn get(&self, category: Category) -> Option<&CheckResult> {
        self.data_availability
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| &entry.result)
    }
}

// Serialization bridge: the JSON file keys `data_availability` by category
// name and stores each entry with its category-specific fields.
#[derive(Serialize, Deserialize)]
struct RawAggregate {
    domain: String,
    domain_name: String,
    check_timestamp: String,
    data_availability: Map<String, Value>,
}

impl From<AggregateResult> for RawAggregate {
    fn from(agg: AggregateResult) -> Self {
        let mut map = Map::new();
        for entry in &agg.data_availability {
            map.insert(
                entry.category.key().to_string(),
                entry.result.to_json(entry.category),
            );
        }
        RawAggregate {
            domain: agg.domain,
            domain_name: agg.domain_name,
            check_timestamp: agg.check_timestamp,
            data_availability: map,
        }
    }
}

impl TryFrom<RawAggregate> for AggregateResult {
    type Error = CheckError;

    fn try_from(raw: RawAggregate) -> Result<Self, CheckError> {
        let mut entries = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let value = raw.data_availability.get(category.key()).ok_or_else(|| {
                CheckError::Shape(format!("missing category entry '{}'", category.key()))
            })?;
            entries.push(CategoryCheck {
                category,
                result: CheckResult::from_json(category, value)?,
            });
        }

        Ok(AggregateResult {
            domain: raw.domain,
            domain_name: raw.domain_name,
            check_timestamp: raw.check_timestamp,
            data_availability: entries,
        })
    }
}
