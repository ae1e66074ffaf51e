use crate::error::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value persistence with the shape of `window.localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStorage;
    use crate::error::StorageError;
    use wasm_bindgen::JsValue;

    fn js_error(err: JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{:?}", err))
    }

    /// `window.localStorage` of the current browser profile.
    #[derive(Debug, Clone)]
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        pub fn new() -> Result<Self, StorageError> {
            let window = web_sys::window().ok_or(StorageError::Unavailable)?;
            let storage = window
                .local_storage()
                .map_err(|_| StorageError::Unavailable)?
                .ok_or(StorageError::Unavailable)?;
            Ok(BrowserStorage { storage })
        }
    }

    impl KeyValueStorage for BrowserStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|e| StorageError::Read(js_error(e)))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(js_error(e)))
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.storage
                .remove_item(key)
                .map_err(|e| StorageError::Write(js_error(e)))
        }
    }
}
