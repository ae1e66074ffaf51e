use crate::error::{ServiceError, ServiceResult, StorageError};
use crate::models::Entity;
use crate::storage::KeyValueStorage;
use leptos::logging::{error, log, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// A working collection of `T` loaded from storage (or the seed dataset) and
/// written back under `key` after every mutation.
///
/// All access is synchronous; callers add latency on top.
pub struct EntityStore<T: Entity> {
    key: String,
    storage: Rc<dyn KeyValueStorage>,
    items: RefCell<Vec<T>>,
}

impl<T: Entity> EntityStore<T> {
    /// Load the collection stored under `key`, falling back to a copy of
    /// `seed` when nothing is stored or the stored data cannot be read.
    pub fn open(key: impl Into<String>, storage: Rc<dyn KeyValueStorage>, seed: &[T]) -> Self {
        let key = key.into();
        let items = Self::load(&key, storage.as_ref(), seed);
        log!("[STORE] Opened '{}' with {} {} records", key, items.len(), T::KIND);
        EntityStore {
            key,
            storage,
            items: RefCell::new(items),
        }
    }

    fn load(key: &str, storage: &dyn KeyValueStorage, seed: &[T]) -> Vec<T> {
        match storage.get_item(key) {
            Ok(Some(stored)) => match serde_json::from_str::<Vec<T>>(&stored) {
                Ok(items) => items,
                Err(e) => {
                    warn!("[STORE] Discarding unreadable data under '{}': {}", key, e);
                    seed.to_vec()
                }
            },
            Ok(None) => seed.to_vec(),
            Err(e) => {
                error!("[STORE] Error loading '{}' from storage: {}", key, e);
                seed.to_vec()
            }
        }
    }

    // Write failures are logged and dropped; the in-memory change stands.
    fn persist(&self) {
        if let Err(e) = self.write() {
            error!("[STORE] Error saving '{}' to storage: {}", self.key, e);
        }
    }

    fn write(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&*self.items.borrow())
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(&self.key, &json)
    }

    fn not_found(id: u32) -> ServiceError {
        warn!("[STORE] {} with ID {} not found", T::KIND, id);
        ServiceError::NotFound { kind: T::KIND, id }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn all(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items
            .borrow()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u32) -> ServiceResult<T> {
        self.items
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// `max(existing ids, 0) + 1`
    pub fn next_id(&self) -> u32 {
        self.items.borrow().iter().map(Entity::id).max().unwrap_or(0) + 1
    }

    pub fn insert(&self, draft: T::Draft) -> T {
        let entity = T::from_draft(self.next_id(), draft);
        self.items.borrow_mut().push(entity.clone());
        self.persist();
        log!("[STORE] Created {} {}", T::KIND, entity.id());
        entity
    }

    pub fn update(&self, id: u32, patch: T::Patch) -> ServiceResult<T> {
        let updated = {
            let mut items = self.items.borrow_mut();
            let Some(entity) = items.iter_mut().find(|item| item.id() == id) else {
                return Err(Self::not_found(id));
            };
            entity.apply_patch(patch);
            entity.clone()
        };
        self.persist();
        Ok(updated)
    }

    pub fn remove(&self, id: u32) -> ServiceResult<T> {
        let removed = {
            let mut items = self.items.borrow_mut();
            let Some(index) = items.iter().position(|item| item.id() == id) else {
                return Err(Self::not_found(id));
            };
            items.remove(index)
        };
        self.persist();
        log!("[STORE] Deleted {} {}", T::KIND, id);
        Ok(removed)
    }
}

/// Parse a bundled seed dataset. A broken seed is logged and yields no records.
pub fn parse_seed<T: Entity>(name: &str, json: &str) -> Vec<T> {
    match serde_json::from_str(json) {
        Ok(items) => items,
        Err(e) => {
            error!("[STORE] Seed dataset '{}' is invalid: {}", name, e);
            Vec::new()
        }
    }
}
