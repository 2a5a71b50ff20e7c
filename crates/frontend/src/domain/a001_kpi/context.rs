use super::storage::LocalStoragePersistence;
use contracts::domain::a001_kpi::{
    default_seed, CommitStatus, Kpi, KpiId, KpiStore, StoreError,
};
use leptos::prelude::*;

pub type BrowserKpiStore = KpiStore<LocalStoragePersistence>;

/// Хранилище KPI текущей сессии, доступное всем экранам через context
#[derive(Clone, Copy)]
pub struct KpiStoreContext {
    store: RwSignal<BrowserKpiStore>,
}

impl KpiStoreContext {
    pub fn new() -> Self {
        let store = KpiStore::load(LocalStoragePersistence::new(), default_seed());
        log::info!("Loaded {} KPIs", store.len());
        Self {
            store: RwSignal::new(store),
        }
    }

    /// Reactive copy of the ordered collection.
    pub fn kpis(&self) -> Vec<Kpi> {
        self.store.with(|s| s.snapshot())
    }

    /// Result of the last localStorage write.
    pub fn commit_status(&self) -> CommitStatus {
        self.store.with(|s| s.last_commit().clone())
    }

    pub fn get_untracked(&self, id: &KpiId) -> Option<Kpi> {
        self.store.with_untracked(|s| s.get(id).cloned())
    }

    pub fn add(&self, kpi: Kpi) -> Result<KpiId, StoreError> {
        self.mutate(|s| s.add(kpi))
            .unwrap_or(Err(StoreError::Unavailable))
    }

    pub fn update(&self, kpi: Kpi) -> Result<(), StoreError> {
        self.mutate(|s| s.update(kpi))
            .unwrap_or(Err(StoreError::Unavailable))
    }

    pub fn remove(&self, id: &KpiId) -> bool {
        self.mutate(|s| s.remove(id)).unwrap_or(false)
    }

    /// `None` only when the owning component tree has been disposed.
    fn mutate<R>(&self, f: impl FnOnce(&mut BrowserKpiStore) -> R) -> Option<R> {
        let result = self.store.try_update(f);
        if result.is_none() {
            log::warn!("KPI store signal disposed, mutation dropped");
        }
        result
    }
}

impl Default for KpiStoreContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the KPI store
pub fn use_kpi_store() -> KpiStoreContext {
    use_context::<KpiStoreContext>().expect("KpiStoreContext not found in component tree")
}
