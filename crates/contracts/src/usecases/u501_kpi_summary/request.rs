use crate::domain::a001_kpi::Kpi;
use serde::{Deserialize, Serialize};

/// Строка KPI в запросе на генерацию обзора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummaryItem {
    pub name: String,
    pub actual: f64,
    pub target: f64,
    pub unit: String,
    /// Процент выполнения, например "85.0%"
    pub performance: String,
}

impl From<&Kpi> for KpiSummaryItem {
    fn from(kpi: &Kpi) -> Self {
        Self {
            name: kpi.name.clone(),
            actual: kpi.actual,
            target: kpi.target,
            unit: kpi.unit.clone(),
            performance: format!("{:.1}%", kpi.ratio() * 100.0),
        }
    }
}

/// Запрос на генерацию обзора
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummaryRequest {
    pub kpis: Vec<KpiSummaryItem>,
}

impl KpiSummaryRequest {
    pub fn from_kpis(kpis: &[Kpi]) -> Self {
        Self {
            kpis: kpis.iter().map(KpiSummaryItem::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::default_seed;

    #[test]
    fn test_from_kpis_formats_performance() {
        let request = KpiSummaryRequest::from_kpis(&default_seed());
        assert_eq!(request.kpis.len(), 6);
        assert_eq!(request.kpis[0].name, "Q3 Revenue");
        assert_eq!(request.kpis[0].performance, "85.0%");
        assert_eq!(request.kpis[3].performance, "37.5%");
        // zero target
        assert_eq!(request.kpis[4].performance, "0.0%");
    }
}
