use serde::{Deserialize, Serialize};

/// The eight BPS content categories covered by an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StaticTables,
    DynamicTables,
    Subjects,
    Publications,
    PressReleases,
    StrategicIndicators,
    News,
    Infographics,
}

impl Category {
    /// Fixed order used by the aggregate check.
    pub const ALL: [Category; 8] = [
        Category::StaticTables,
        Category::DynamicTables,
        Category::Subjects,
        Category::Publications,
        Category::PressReleases,
        Category::StrategicIndicators,
        Category::News,
        Category::Infographics,
    ];

    /// Key used for this category in the aggregate result map.
    pub fn key(self) -> &'static str {
        match self {
            Category::StaticTables => "static_tables",
            Category::DynamicTables => "dynamic_tables",
            Category::Subjects => "subjects",
            Category::Publications => "publications",
            Category::PressReleases => "press_releases",
            Category::StrategicIndicators => "strategic_indicators",
            Category::News => "news",
            Category::Infographics => "infographics",
        }
    }

    /// Model name in the upstream `list` endpoint.
    pub fn model(self) -> &'static str {
        match self {
            Category::StaticTables => "statictable",
            Category::DynamicTables => "data",
            Category::Subjects => "subject",
            Category::Publications => "publication",
            Category::PressReleases => "pressrelease",
            Category::StrategicIndicators => "strategicindicator",
            Category::News => "news",
            Category::Infographics => "infographic",
        }
    }

    // Suffix for the count/sample result fields. Both table categories
    // share the "tables" suffix.
    fn noun(self) -> &'static str {
        match self {
            Category::StaticTables | Category::DynamicTables => "tables",
            Category::Subjects => "subjects",
            Category::Publications => "publications",
            Category::PressReleases => "press_releases",
            Category::StrategicIndicators => "indicators",
            Category::News => "news",
            Category::Infographics => "infographics",
        }
    }

    pub fn total_field(self) -> String {
        format!("total_{}", self.noun())
    }

    pub fn sample_field(self) -> String {
        format!("sample_{}", self.noun())
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::StaticTables => "Static Tables",
            Category::DynamicTables => "Dynamic Tables",
            Category::Subjects => "Subjects",
            Category::Publications => "Publications",
            Category::PressReleases => "Press Releases",
            Category::StrategicIndicators => "Strategic Indicators",
            Category::News => "News",
            Category::Infographics => "Infographics",
        }
    }

    /// Static and dynamic tables go through the dedicated catalog call and
    /// carry no raw envelope in their results.
    pub fn uses_table_catalog(self) -> bool {
        matches!(self, Category::StaticTables | Category::DynamicTables)
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_order_is_fixed() {
        assert_eq!(Category::ALL.len(), 8);
        assert_eq!(Category::ALL[0], Category::StaticTables);
        assert_eq!(Category::ALL[1], Category::DynamicTables);
        assert_eq!(Category::ALL[2], Category::Subjects);
        assert_eq!(Category::ALL[7], Category::Infographics);
    }

    #[test]
    fn table_categories_share_the_tables_field() {
        assert_eq!(Category::StaticTables.total_field(), "total_tables");
        assert_eq!(Category::DynamicTables.total_field(), "total_tables");
        assert_eq!(Category::StrategicIndicators.total_field(), "total_indicators");
        assert_eq!(Category::PressReleases.sample_field(), "sample_press_releases");
    }

    #[test]
    fn keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("unknown"), None);
    }
}
