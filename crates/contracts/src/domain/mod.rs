pub mod a001_kpi;
