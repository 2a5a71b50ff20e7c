use super::aggregate::Kpi;
use super::category::KpiCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки проверки формы KPI
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KpiValidationError {
    #[error("KPI name is required")]
    EmptyName,

    #[error("Unit is required")]
    EmptyUnit,

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Сырые значения формы администратора (как введены пользователем)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiDraft {
    pub name: String,
    pub actual: String,
    pub target: String,
    pub unit: String,
    pub description: String,
    pub category: KpiCategory,
}

/// Проверенные поля, из которых собирается `Kpi`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidKpiFields {
    pub name: String,
    pub actual: f64,
    pub target: f64,
    pub unit: String,
    pub description: String,
    pub category: KpiCategory,
}

impl KpiDraft {
    /// Pre-fill the form from an existing record.
    pub fn from_kpi(kpi: &Kpi) -> Self {
        Self {
            name: kpi.name.clone(),
            actual: kpi.actual.to_string(),
            target: kpi.target.to_string(),
            unit: kpi.unit.clone(),
            description: kpi.description.clone(),
            category: kpi.category.clone(),
        }
    }

    pub fn validate(&self) -> Result<ValidKpiFields, KpiValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(KpiValidationError::EmptyName);
        }
        let unit = self.unit.trim();
        if unit.is_empty() {
            return Err(KpiValidationError::EmptyUnit);
        }

        Ok(ValidKpiFields {
            name: name.to_string(),
            actual: parse_finite("Actual value", &self.actual)?,
            target: parse_finite("Target value", &self.target)?,
            unit: unit.to_string(),
            description: self.description.trim().to_string(),
            category: self.category.clone(),
        })
    }
}

fn parse_finite(field: &'static str, raw: &str) -> Result<f64, KpiValidationError> {
    let invalid = || KpiValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::aggregate::KpiId;

    fn draft() -> KpiDraft {
        KpiDraft {
            name: "  New Leads ".into(),
            actual: "45".into(),
            target: "120.5".into(),
            unit: "#".into(),
            description: "Qualified leads".into(),
            category: KpiCategory::Sales,
        }
    }

    #[test]
    fn test_valid_draft_builds_record() {
        let fields = draft().validate().unwrap();
        let kpi = Kpi::from_draft(KpiId::new("x"), fields);
        assert_eq!(kpi.name, "New Leads");
        assert_eq!(kpi.actual, 45.0);
        assert_eq!(kpi.target, 120.5);
        assert_eq!(kpi.category, KpiCategory::Sales);
    }

    #[test]
    fn test_required_fields() {
        let mut d = draft();
        d.name = "   ".into();
        assert_eq!(d.validate(), Err(KpiValidationError::EmptyName));

        let mut d = draft();
        d.unit = String::new();
        assert_eq!(d.validate(), Err(KpiValidationError::EmptyUnit));
    }

    #[test]
    fn test_numbers_must_be_finite() {
        for bad in ["", "abc", "inf", "NaN"] {
            let mut d = draft();
            d.target = bad.into();
            assert!(matches!(
                d.validate(),
                Err(KpiValidationError::InvalidNumber { field: "Target value", .. })
            ));
        }

        let mut d = draft();
        d.actual = "-3.5".into();
        assert_eq!(d.validate().unwrap().actual, -3.5);
    }

    #[test]
    fn test_zero_target_is_accepted() {
        let mut d = draft();
        d.target = "0".into();
        assert_eq!(d.validate().unwrap().target, 0.0);
    }

    #[test]
    fn test_from_kpi_prefills_form() {
        let kpi = Kpi::new(
            KpiId::new("7"),
            "Server Uptime",
            98.5,
            99.9,
            "%",
            "",
            KpiCategory::Other("Ops".into()),
        );
        let d = KpiDraft::from_kpi(&kpi);
        assert_eq!(d.actual, "98.5");
        assert_eq!(d.target, "99.9");
        assert_eq!(d.category, KpiCategory::Other("Ops".into()));
        assert_eq!(Kpi::from_draft(kpi.id.clone(), d.validate().unwrap()), kpi);
    }
}
