use contracts::domain::a001_kpi::{KpiPersistence, PersistenceError, STORAGE_KEY};
use web_sys::window;

/// Снимок коллекции KPI в localStorage браузера
#[derive(Debug, Clone, Copy)]
pub struct LocalStoragePersistence {
    key: &'static str,
}

impl LocalStoragePersistence {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }
}

impl Default for LocalStoragePersistence {
    fn default() -> Self {
        Self::new()
    }
}

fn get_local_storage() -> Result<web_sys::Storage, PersistenceError> {
    let window = window().ok_or_else(|| PersistenceError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| PersistenceError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| PersistenceError::Unavailable("localStorage is disabled".into()))
}

impl KpiPersistence for LocalStoragePersistence {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        get_local_storage()?
            .get_item(self.key)
            .map_err(|e| PersistenceError::Read(format!("{e:?}")))
    }

    fn write(&mut self, blob: &str) -> Result<(), PersistenceError> {
        get_local_storage()?
            .set_item(self.key, blob)
            .map_err(|e| PersistenceError::Write(format!("{e:?}")))
    }
}
