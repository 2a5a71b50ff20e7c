//! Classification of KPI results: performance ratio, tier and dashboard totals.
//!
//! All functions are pure and total over `f64`. Non-finite inputs are passed
//! through; callers validate numbers before they reach a `Kpi`.

pub mod filter;

pub use filter::CategoryFilter;

use crate::domain::a001_kpi::aggregate::Kpi;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Ratio from which a KPI is no longer off track.
pub const AT_RISK_THRESHOLD: f64 = 0.50;

/// Ratio from which a KPI is on track.
pub const ON_TRACK_THRESHOLD: f64 = 0.75;

/// `actual / target`, or `0.0` when the target is zero.
///
/// A zero target yields `0.0` even when `actual` is also zero, so a
/// "Safety Incidents: 0 of 0" KPI reports 0% and classifies as off track.
pub fn performance_ratio(actual: f64, target: f64) -> f64 {
    if target == 0.0 {
        0.0
    } else {
        actual / target
    }
}

/// Ratio as a gauge fill in `[0, 100]`. Display only, never used for tiering.
pub fn gauge_percent(actual: f64, target: f64) -> f64 {
    (performance_ratio(actual, target) * 100.0).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Performance band of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    OffTrack,
    AtRisk,
    OnTrack,
}

impl PerformanceTier {
    /// Lower bound of each band is inclusive. NaN falls through to `OffTrack`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= ON_TRACK_THRESHOLD {
            PerformanceTier::OnTrack
        } else if ratio >= AT_RISK_THRESHOLD {
            PerformanceTier::AtRisk
        } else {
            PerformanceTier::OffTrack
        }
    }

    /// Tier of a gauge reading given in percent.
    pub fn from_percent(percent: f64) -> Self {
        Self::from_ratio(percent / 100.0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::OffTrack => "Off Track",
            PerformanceTier::AtRisk => "At Risk",
            PerformanceTier::OnTrack => "On Track",
        }
    }

    /// Zone caption used in the dashboard legend.
    pub fn zone_caption(&self) -> &'static str {
        match self {
            PerformanceTier::OffTrack => "0-50% (Critical)",
            PerformanceTier::AtRisk => "50-75% (At Risk)",
            PerformanceTier::OnTrack => "75-100% (On Track)",
        }
    }

    pub fn gauge_color(&self) -> &'static str {
        match self {
            PerformanceTier::OffTrack => "#ef4444",
            PerformanceTier::AtRisk => "#eab308",
            PerformanceTier::OnTrack => "#22c55e",
        }
    }

    /// BEM modifier, e.g. `stat-card--on-track`.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            PerformanceTier::OffTrack => "off-track",
            PerformanceTier::AtRisk => "at-risk",
            PerformanceTier::OnTrack => "on-track",
        }
    }

    pub fn all() -> [PerformanceTier; 3] {
        [
            PerformanceTier::OffTrack,
            PerformanceTier::AtRisk,
            PerformanceTier::OnTrack,
        ]
    }
}

// ---------------------------------------------------------------------------
// Aggregate stats
// ---------------------------------------------------------------------------

/// Totals shown in the dashboard header cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub on_track: usize,
    pub at_risk: usize,
    pub off_track: usize,
    /// Mean of the unclamped ratios × 100; `0.0` for an empty collection.
    pub overall_percentage: f64,
}

impl DashboardStats {
    pub fn compute(kpis: &[Kpi]) -> Self {
        let mut stats = DashboardStats {
            total: kpis.len(),
            ..Default::default()
        };
        if kpis.is_empty() {
            return stats;
        }

        let mut ratio_sum = 0.0;
        for kpi in kpis {
            let ratio = kpi.ratio();
            ratio_sum += ratio;
            match PerformanceTier::from_ratio(ratio) {
                PerformanceTier::OnTrack => stats.on_track += 1,
                PerformanceTier::AtRisk => stats.at_risk += 1,
                PerformanceTier::OffTrack => stats.off_track += 1,
            }
        }
        stats.overall_percentage = ratio_sum / kpis.len() as f64 * 100.0;
        stats
    }

    pub fn count(&self, tier: PerformanceTier) -> usize {
        match tier {
            PerformanceTier::OnTrack => self.on_track,
            PerformanceTier::AtRisk => self.at_risk,
            PerformanceTier::OffTrack => self.off_track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_kpi::{KpiCategory, KpiId};

    fn kpi(actual: f64, target: f64) -> Kpi {
        Kpi::new(
            KpiId::generate(),
            "k",
            actual,
            target,
            "",
            "",
            KpiCategory::Finance,
        )
    }

    fn tier_of(actual: f64, target: f64) -> PerformanceTier {
        PerformanceTier::from_ratio(performance_ratio(actual, target))
    }

    #[test]
    fn test_ratio_zero_target_is_zero() {
        for actual in [0.0, 1.0, -5.0, 1e9] {
            assert_eq!(performance_ratio(actual, 0.0), 0.0);
        }
        assert_eq!(performance_ratio(5.0, -0.0), 0.0);
    }

    #[test]
    fn test_ratio_negative_values() {
        assert_eq!(performance_ratio(-50.0, 100.0), -0.5);
        assert_eq!(performance_ratio(-50.0, -100.0), 0.5);
    }

    #[test]
    fn test_tier_boundaries_are_inclusive_on_lower_end() {
        assert_eq!(PerformanceTier::from_ratio(0.4999), PerformanceTier::OffTrack);
        assert_eq!(PerformanceTier::from_ratio(0.50), PerformanceTier::AtRisk);
        assert_eq!(PerformanceTier::from_ratio(0.7499), PerformanceTier::AtRisk);
        assert_eq!(PerformanceTier::from_ratio(0.75), PerformanceTier::OnTrack);
        assert_eq!(PerformanceTier::from_ratio(3.0), PerformanceTier::OnTrack);
        assert_eq!(PerformanceTier::from_ratio(-1.0), PerformanceTier::OffTrack);
        assert_eq!(PerformanceTier::from_ratio(f64::NAN), PerformanceTier::OffTrack);
    }

    #[test]
    fn test_tier_matches_ratio_for_positive_targets() {
        for target in [1.0, 3.0, 7.5, 120.0, 1000.0] {
            for step in 0..=200 {
                let actual = target * step as f64 / 100.0;
                let ratio = actual / target;
                let expected = if ratio >= 0.75 {
                    PerformanceTier::OnTrack
                } else if ratio >= 0.5 {
                    PerformanceTier::AtRisk
                } else {
                    PerformanceTier::OffTrack
                };
                assert_eq!(tier_of(actual, target), expected, "{actual}/{target}");
            }
        }
    }

    #[test]
    fn test_scenarios() {
        assert!((performance_ratio(850.0, 1000.0) - 0.85).abs() < 1e-12);
        assert_eq!(tier_of(850.0, 1000.0), PerformanceTier::OnTrack);

        assert_eq!(performance_ratio(45.0, 120.0), 0.375);
        assert_eq!(tier_of(45.0, 120.0), PerformanceTier::OffTrack);

        assert_eq!(performance_ratio(0.0, 0.0), 0.0);
        assert_eq!(tier_of(0.0, 0.0), PerformanceTier::OffTrack);
    }

    #[test]
    fn test_gauge_is_clamped_but_tier_is_not() {
        assert_eq!(gauge_percent(150.0, 100.0), 100.0);
        assert_eq!(gauge_percent(-10.0, 100.0), 0.0);
        assert_eq!(gauge_percent(5.0, 0.0), 0.0);
        assert_eq!(tier_of(150.0, 100.0), PerformanceTier::OnTrack);

        let stats = DashboardStats::compute(&[kpi(150.0, 100.0)]);
        assert_eq!(stats.overall_percentage, 150.0);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(
            DashboardStats::compute(&[]),
            DashboardStats {
                total: 0,
                on_track: 0,
                at_risk: 0,
                off_track: 0,
                overall_percentage: 0.0,
            }
        );
    }

    #[test]
    fn test_aggregate_two_kpis() {
        let stats = DashboardStats::compute(&[kpi(90.0, 100.0), kpi(40.0, 100.0)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.on_track, 1);
        assert_eq!(stats.at_risk, 0);
        assert_eq!(stats.off_track, 1);
        assert!((stats.overall_percentage - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_counts_zero_target_as_off_track() {
        let stats = DashboardStats::compute(&[kpi(0.0, 0.0), kpi(60.0, 100.0)]);
        assert_eq!(stats.off_track, 1);
        assert_eq!(stats.at_risk, 1);
        assert!((stats.overall_percentage - 30.0).abs() < 1e-9);
        assert_eq!(
            stats.on_track + stats.at_risk + stats.off_track,
            stats.total
        );
    }

    #[test]
    fn test_from_percent_uses_same_bands() {
        assert_eq!(PerformanceTier::from_percent(49.9), PerformanceTier::OffTrack);
        assert_eq!(PerformanceTier::from_percent(50.0), PerformanceTier::AtRisk);
        assert_eq!(PerformanceTier::from_percent(75.0), PerformanceTier::OnTrack);
    }
}
