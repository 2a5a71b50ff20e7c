pub mod d400_kpi_overview;

pub use d400_kpi_overview::ui::KpiOverviewDashboard;
