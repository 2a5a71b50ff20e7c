pub mod aggregate;
pub mod category;
pub mod draft;
pub mod seed;
pub mod store;

pub use aggregate::{Kpi, KpiId};
pub use category::KpiCategory;
pub use draft::{KpiDraft, KpiValidationError, ValidKpiFields};
pub use seed::default_seed;
pub use store::{
    CommitStatus, KpiPersistence, KpiStore, MemoryPersistence, PersistenceError, StoreError,
    STORAGE_KEY,
};
