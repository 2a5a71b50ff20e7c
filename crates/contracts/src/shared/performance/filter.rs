use crate::domain::a001_kpi::{Kpi, KpiCategory};

/// Department filter of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(KpiCategory),
}

impl CategoryFilter {
    const ALL_VALUE: &'static str = "All";

    pub fn matches(&self, kpi: &Kpi) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &kpi.category == category,
        }
    }

    /// Matching records in their original order.
    pub fn apply(&self, kpis: &[Kpi]) -> Vec<Kpi> {
        kpis.iter().filter(|k| self.matches(k)).cloned().collect()
    }

    pub fn is_filtered(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// `<select>` option value.
    pub fn value(&self) -> String {
        match self {
            CategoryFilter::All => Self::ALL_VALUE.to_string(),
            CategoryFilter::Only(category) => category.as_str().to_string(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(KpiCategory::from_label(value))
        }
    }

    /// Heading of the overall performance panel.
    pub fn heading(&self) -> String {
        match self {
            CategoryFilter::All => "Overall Performance".to_string(),
            CategoryFilter::Only(category) => format!("{} Performance", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::default_seed;

    #[test]
    fn test_all_keeps_everything_in_order() {
        let seed = default_seed();
        assert_eq!(CategoryFilter::All.apply(&seed), seed);
    }

    #[test]
    fn test_only_filters_by_category() {
        let seed = default_seed();
        let it = CategoryFilter::Only(KpiCategory::It).apply(&seed);
        assert_eq!(it.len(), 1);
        assert_eq!(it[0].name, "Server Uptime");

        assert!(CategoryFilter::Only(KpiCategory::Hr).apply(&seed).is_empty());
    }

    #[test]
    fn test_select_value_round_trip() {
        assert_eq!(CategoryFilter::from_value("All"), CategoryFilter::All);
        let f = CategoryFilter::from_value("Supply Chain");
        assert_eq!(f, CategoryFilter::Only(KpiCategory::SupplyChain));
        assert_eq!(f.value(), "Supply Chain");
        assert!(f.is_filtered());
        assert_eq!(f.heading(), "Supply Chain Performance");
    }
}
