pub mod u501_kpi_summary;
