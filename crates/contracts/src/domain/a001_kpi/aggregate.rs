use super::category::KpiCategory;
use super::draft::ValidKpiFields;
use crate::shared::performance::{performance_ratio, PerformanceTier};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// ID записи KPI
///
/// Строка, а не `Uuid`: записи, сохранённые старой версией дашборда, имеют
/// идентификаторы вида `"1"` или `"1718035200000"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KpiId(pub String);

impl KpiId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh collision-resistant id for a newly created record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for KpiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KpiId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Агрегат KPI
///
/// Одна запись = один отслеживаемый показатель (факт против цели).
/// Структура пассивная: проверки выполняются при создании через `KpiDraft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: KpiId,
    pub name: String,
    pub actual: f64,
    pub target: f64,
    /// Символ единицы измерения ("%", "k", "$"), может быть пустым
    pub unit: String,
    pub description: String,
    pub category: KpiCategory,
}

impl Kpi {
    pub fn new(
        id: KpiId,
        name: impl Into<String>,
        actual: f64,
        target: f64,
        unit: impl Into<String>,
        description: impl Into<String>,
        category: KpiCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            actual,
            target,
            unit: unit.into(),
            description: description.into(),
            category,
        }
    }

    pub fn from_draft(id: KpiId, fields: ValidKpiFields) -> Self {
        Self {
            id,
            name: fields.name,
            actual: fields.actual,
            target: fields.target,
            unit: fields.unit,
            description: fields.description,
            category: fields.category,
        }
    }

    pub fn ratio(&self) -> f64 {
        performance_ratio(self.actual, self.target)
    }

    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_ratio(self.ratio())
    }

    /// Отклонение от цели (положительное значит выше цели)
    pub fn variance(&self) -> f64 {
        self.actual - self.target
    }

    pub fn is_above_target(&self) -> bool {
        self.variance() >= 0.0
    }
}
