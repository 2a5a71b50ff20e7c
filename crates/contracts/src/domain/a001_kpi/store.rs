//! Хранилище KPI: упорядоченная коллекция записей текущей сессии.
//!
//! Коллекция в памяти является источником истины. После каждой успешной
//! мутации вызывается `commit()`, который целиком записывает снимок коллекции
//! во внешнее хранилище (`KpiPersistence`). Ошибки записи не поднимаются
//! наружу: они логируются и видны через `last_commit()`.

use super::aggregate::{Kpi, KpiId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;

/// Ключ пространства имён в хранилище браузера
pub const STORAGE_KEY: &str = "ncc_kpis";

/// Ошибки внешнего хранилища
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),
}

/// Непрозрачное key-value хранилище для сериализованной коллекции
pub trait KpiPersistence {
    /// Прочитать сохранённый снимок (`None`, если ничего не сохранялось)
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Перезаписать снимок целиком
    fn write(&mut self, blob: &str) -> Result<(), PersistenceError>;
}

/// In-process blob holder. Used on native targets and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    blob: Option<String>,
    fail_writes: bool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            fail_writes: false,
        }
    }

    /// Every `write` fails, the stored blob is left as it was.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl KpiPersistence for MemoryPersistence {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Write("quota exceeded".into()));
        }
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

/// Ошибки мутаций хранилища
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("KPI with id '{0}' already exists")]
    DuplicateId(KpiId),

    #[error("KPI with id '{0}' not found")]
    NotFound(KpiId),

    /// The owning session was torn down before the mutation ran.
    #[error("KPI store is no longer available")]
    Unavailable,
}

/// Результат последней записи снимка
#[derive(Debug, Clone, PartialEq)]
pub enum CommitStatus {
    /// Мутаций ещё не было
    Pending,
    Saved { at: DateTime<Utc> },
    Failed(String),
}

pub struct KpiStore<P: KpiPersistence> {
    kpis: Vec<Kpi>,
    persistence: P,
    last_commit: CommitStatus,
}

impl<P: KpiPersistence> KpiStore<P> {
    /// Load the persisted collection, falling back to `seed` when nothing is
    /// stored or the blob cannot be read or parsed.
    pub fn load(persistence: P, seed: Vec<Kpi>) -> Self {
        let kpis = match persistence.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Kpi>>(&raw) {
                Ok(kpis) => dedupe_ids(kpis),
                Err(e) => {
                    log::warn!("Stored KPI collection is corrupt, using seed: {}", e);
                    seed
                }
            },
            Ok(None) => {
                log::debug!("No stored KPI collection, using seed");
                seed
            }
            Err(e) => {
                log::warn!("Failed to read KPI collection, using seed: {}", e);
                seed
            }
        };

        Self {
            kpis,
            persistence,
            last_commit: CommitStatus::Pending,
        }
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.kpis
    }

    pub fn snapshot(&self) -> Vec<Kpi> {
        self.kpis.clone()
    }

    pub fn get(&self, id: &KpiId) -> Option<&Kpi> {
        self.kpis.iter().find(|k| &k.id == id)
    }

    pub fn contains(&self, id: &KpiId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.kpis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn last_commit(&self) -> &CommitStatus {
        &self.last_commit
    }

    /// Append a record. A blank id is replaced with a generated one.
    pub fn add(&mut self, mut kpi: Kpi) -> Result<KpiId, StoreError> {
        if kpi.id.is_empty() {
            kpi.id = KpiId::generate();
        }
        if self.contains(&kpi.id) {
            return Err(StoreError::DuplicateId(kpi.id));
        }

        let id = kpi.id.clone();
        log::debug!("KPI added: {} ({})", kpi.name, id);
        self.kpis.push(kpi);
        self.commit();
        Ok(id)
    }

    /// Replace the record with the same id, keeping its position.
    pub fn update(&mut self, kpi: Kpi) -> Result<(), StoreError> {
        let Some(slot) = self.kpis.iter_mut().find(|k| k.id == kpi.id) else {
            return Err(StoreError::NotFound(kpi.id));
        };

        log::debug!("KPI updated: {} ({})", kpi.name, kpi.id);
        *slot = kpi;
        self.commit();
        Ok(())
    }

    /// Delete by id. Returns `false` (and writes nothing) when the id is absent.
    pub fn remove(&mut self, id: &KpiId) -> bool {
        let Some(index) = self.kpis.iter().position(|k| &k.id == id) else {
            return false;
        };

        let removed = self.kpis.remove(index);
        log::debug!("KPI removed: {} ({})", removed.name, removed.id);
        self.commit();
        true
    }

    /// Write the whole collection to the persistence collaborator.
    ///
    /// Best-effort: failures are logged and recorded, never returned.
    pub fn commit(&mut self) -> &CommitStatus {
        let result = serde_json::to_string(&self.kpis)
            .map_err(|e| PersistenceError::Write(e.to_string()))
            .and_then(|blob| self.persistence.write(&blob));

        self.last_commit = match result {
            Ok(()) => CommitStatus::Saved { at: Utc::now() },
            Err(e) => {
                log::warn!("Failed to persist KPI collection: {}", e);
                CommitStatus::Failed(e.to_string())
            }
        };
        &self.last_commit
    }
}

/// Keep the first record for each id; blobs written by older builds could
/// contain collisions from timestamp ids.
fn dedupe_ids(kpis: Vec<Kpi>) -> Vec<Kpi> {
    let mut seen = HashSet::new();
    let before = kpis.len();
    let unique: Vec<Kpi> = kpis
        .into_iter()
        .filter(|k| seen.insert(k.id.clone()))
        .collect();
    if unique.len() != before {
        log::warn!(
            "Dropped {} KPI records with duplicate ids",
            before - unique.len()
        );
    }
    unique
}
