use super::aggregate::{Kpi, KpiId};
use super::category::KpiCategory;

/// Demo collection shown on first launch, before anything has been saved.
pub fn default_seed() -> Vec<Kpi> {
    vec![
        Kpi::new(
            KpiId::new("1"),
            "Q3 Revenue",
            850.0,
            1000.0,
            "k",
            "Total revenue for the third quarter across all regions.",
            KpiCategory::Finance,
        ),
        Kpi::new(
            KpiId::new("2"),
            "Customer Sat.",
            92.0,
            90.0,
            "%",
            "CSAT score based on post-ticket surveys.",
            KpiCategory::Marketing,
        ),
        Kpi::new(
            KpiId::new("3"),
            "Server Uptime",
            98.5,
            99.9,
            "%",
            "Platform availability percentage.",
            KpiCategory::It,
        ),
        Kpi::new(
            KpiId::new("4"),
            "New Leads",
            45.0,
            120.0,
            "",
            "Qualified marketing leads generated this month.",
            KpiCategory::Sales,
        ),
        Kpi::new(
            KpiId::new("5"),
            "Safety Incidents",
            0.0,
            0.0,
            "",
            "Number of reportable safety incidents this month.",
            KpiCategory::Sheq,
        ),
        Kpi::new(
            KpiId::new("6"),
            "Project A Delivery",
            80.0,
            100.0,
            "%",
            "Completion percentage of Project A milestones.",
            KpiCategory::Projects,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = default_seed();
        let ids: HashSet<_> = seed.iter().map(|k| k.id.clone()).collect();
        assert_eq!(ids.len(), seed.len());
        assert_eq!(seed.len(), 6);
    }

    #[test]
    fn test_seed_uses_known_categories() {
        assert!(default_seed().iter().all(|k| k.category.is_known()));
    }
}
