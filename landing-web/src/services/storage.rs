//! `localStorage`-backed visit store

use lib_landing::store::VisitStore;
use lib_landing::StoreError;
use web_sys::Storage;

/// Reads and writes the intro marker in `window.localStorage`.
///
/// Storage is looked up on every call; browsers may revoke it at any time
/// (private mode, cleared site data).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StoreError::Read(format!("{:?}", e)))?
            .ok_or(StoreError::Unavailable)
    }
}

impl VisitStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
