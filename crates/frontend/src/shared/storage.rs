use contracts::domain::a002_cart::{CartStore, StoreError};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` as a cart store
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl CartStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = get_local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        match get_local_storage() {
            Some(storage) => {
                let _ = storage.remove_item(key);
            }
            None => log::warn!("localStorage unavailable, '{}' not removed", key),
        }
    }
}
