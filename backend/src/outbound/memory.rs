//! In-process `MineralRepository` for database-less runs and tests.
//!
//! Records live in a `Vec` behind an `RwLock`. Identifiers are assigned from
//! a counter starting at 1, so iteration order by id equals insertion order.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{MineralRepository, MineralRepositoryError};
use crate::domain::{Mineral, MineralAttribute, MineralDraft, MineralId};

#[derive(Debug, Default)]
struct Store {
    minerals: Vec<Mineral>,
    next_id: i32,
}

impl Store {
    fn sorted(mut minerals: Vec<Mineral>) -> Vec<Mineral> {
        minerals.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
        minerals
    }

    fn filtered(&self, keep: impl Fn(&Mineral) -> bool) -> Vec<Mineral> {
        Self::sorted(self.minerals.iter().filter(|m| keep(m)).cloned().collect())
    }
}

/// Repository adapter holding minerals in memory.
///
/// # Examples
/// ```
/// use mineral_catalog::domain::MineralDraft;
/// use mineral_catalog::outbound::memory::InMemoryMineralRepository;
///
/// let repo = InMemoryMineralRepository::with_drafts([
///     MineralDraft::named("Beeri"),
///     MineralDraft::named("Aowan"),
/// ]);
/// assert_eq!(repo.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryMineralRepository {
    store: RwLock<Store>,
}

impl InMemoryMineralRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `drafts`, skipping repeated
    /// names.
    pub fn with_drafts(drafts: impl IntoIterator<Item = MineralDraft>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.write();
            for draft in drafts {
                insert_draft(&mut store, draft);
            }
        }
        repo
    }

    /// Number of stored minerals.
    pub fn len(&self) -> usize {
        self.read().minerals.len()
    }

    /// `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().minerals.is_empty()
    }

    // A panic while holding the lock cannot leave `Store` half-updated, so a
    // poisoned guard is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert_draft(store: &mut Store, draft: MineralDraft) -> Option<Mineral> {
    if store.minerals.iter().any(|m| m.name() == draft.name) {
        return None;
    }
    store.next_id += 1;
    let mineral = Mineral::new(MineralId::new(store.next_id), draft);
    store.minerals.push(mineral.clone());
    Some(mineral)
}

#[async_trait]
impl MineralRepository for InMemoryMineralRepository {
    async fn find_by_id(&self, id: MineralId) -> Result<Option<Mineral>, MineralRepositoryError> {
        Ok(self.read().minerals.iter().find(|m| m.id() == id).cloned())
    }

    async fn list_by_name_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<Mineral>, MineralRepositoryError> {
        Ok(self.read().filtered(|m| m.name_starts_with(prefix)))
    }

    async fn list_by_attribute_values(
        &self,
        attribute: MineralAttribute,
        values: &[String],
    ) -> Result<Vec<Mineral>, MineralRepositoryError> {
        Ok(self
            .read()
            .filtered(|m| values.iter().any(|v| v == m.value(attribute))))
    }

    async fn search(&self, term: &str) -> Result<Vec<Mineral>, MineralRepositoryError> {
        Ok(self.read().filtered(|m| m.matches_term(term)))
    }

    async fn distinct_values(
        &self,
        attribute: MineralAttribute,
    ) -> Result<Vec<String>, MineralRepositoryError> {
        let store = self.read();
        let values: BTreeSet<&str> = store.minerals.iter().map(|m| m.value(attribute)).collect();
        Ok(values.into_iter().map(str::to_owned).collect())
    }

    async fn count(&self) -> Result<u64, MineralRepositoryError> {
        u64::try_from(self.read().minerals.len())
            .map_err(|err| MineralRepositoryError::query(format!("count minerals: {err}")))
    }

    async fn nth(&self, offset: u64) -> Result<Option<Mineral>, MineralRepositoryError> {
        let Ok(offset) = usize::try_from(offset) else {
            return Ok(None);
        };
        Ok(self.read().minerals.get(offset).cloned())
    }

    async fn insert(
        &self,
        draft: &MineralDraft,
    ) -> Result<Option<Mineral>, MineralRepositoryError> {
        Ok(insert_draft(&mut self.write(), draft.clone()))
    }
}
