use serde::{Deserialize, Serialize};
use std::fmt;

/// Подразделение, к которому относится KPI.
///
/// Известные подразделения закрыты перечислением; всё остальное (старые записи,
/// ручной ввод) хранится в `Other` и отображается как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KpiCategory {
    #[default]
    Hr,
    Marketing,
    Sales,
    It,
    SupplyChain,
    Manufacturing,
    Projects,
    Sheq,
    Ipd,
    Finance,
    Other(String),
}

impl KpiCategory {
    /// Known departments in selection-control order.
    pub fn all() -> [KpiCategory; 10] {
        [
            KpiCategory::Hr,
            KpiCategory::Marketing,
            KpiCategory::Sales,
            KpiCategory::It,
            KpiCategory::SupplyChain,
            KpiCategory::Manufacturing,
            KpiCategory::Projects,
            KpiCategory::Sheq,
            KpiCategory::Ipd,
            KpiCategory::Finance,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            KpiCategory::Hr => "HR",
            KpiCategory::Marketing => "Marketing",
            KpiCategory::Sales => "Sales",
            KpiCategory::It => "IT",
            KpiCategory::SupplyChain => "Supply Chain",
            KpiCategory::Manufacturing => "Manufacturing",
            KpiCategory::Projects => "Projects",
            KpiCategory::Sheq => "SHEQ",
            KpiCategory::Ipd => "IPD",
            KpiCategory::Finance => "Finance",
            KpiCategory::Other(label) => label,
        }
    }

    /// Parse a stored label. Never fails: unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "HR" => KpiCategory::Hr,
            "Marketing" => KpiCategory::Marketing,
            "Sales" => KpiCategory::Sales,
            "IT" => KpiCategory::It,
            "Supply Chain" => KpiCategory::SupplyChain,
            "Manufacturing" => KpiCategory::Manufacturing,
            "Projects" => KpiCategory::Projects,
            "SHEQ" => KpiCategory::Sheq,
            "IPD" => KpiCategory::Ipd,
            "Finance" => KpiCategory::Finance,
            other => KpiCategory::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, KpiCategory::Other(_))
    }
}

impl fmt::Display for KpiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for KpiCategory {
    fn from(label: String) -> Self {
        match KpiCategory::from_label(&label) {
            KpiCategory::Other(_) => KpiCategory::Other(label),
            known => known,
        }
    }
}

impl From<KpiCategory> for String {
    fn from(category: KpiCategory) -> Self {
        match category {
            KpiCategory::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for category in KpiCategory::all() {
            assert!(category.is_known());
            assert_eq!(KpiCategory::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn test_all_keeps_display_order() {
        let all = KpiCategory::all();
        let labels: Vec<&str> = all.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "HR",
                "Marketing",
                "Sales",
                "IT",
                "Supply Chain",
                "Manufacturing",
                "Projects",
                "SHEQ",
                "IPD",
                "Finance"
            ]
        );
    }

    #[test]
    fn test_free_text_label_is_preserved() {
        let category: KpiCategory = serde_json::from_str("\"Legal & Compliance\"").unwrap();
        assert_eq!(category, KpiCategory::Other("Legal & Compliance".into()));
        assert!(!category.is_known());
        assert_eq!(
            serde_json::to_string(&category).unwrap(),
            "\"Legal & Compliance\""
        );
    }

    #[test]
    fn test_serializes_as_plain_label() {
        assert_eq!(
            serde_json::to_string(&KpiCategory::SupplyChain).unwrap(),
            "\"Supply Chain\""
        );
        assert_eq!(KpiCategory::default().as_str(), "HR");
    }
}
