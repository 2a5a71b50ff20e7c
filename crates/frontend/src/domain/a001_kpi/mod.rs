pub mod context;
pub mod storage;
pub mod ui;

pub use context::{use_kpi_store, KpiStoreContext};
