mod dashboard;

pub use dashboard::KpiOverviewDashboard;
