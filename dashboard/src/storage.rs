//! session flag in browser local storage

use shared::config::SESSION_STORAGE_KEY;
use shared::StorageError;
use web_sys::Storage;

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Access("local_storage()"))?
        .ok_or(StorageError::Unavailable)
}

/// writes `loggedIn=true`, or removes the key
pub fn set_session_flag(logged_in: bool) -> Result<(), StorageError> {
    let storage = local_storage()?;
    if logged_in {
        storage
            .set_item(SESSION_STORAGE_KEY, "true")
            .map_err(|_| StorageError::Access("set_item()"))
    } else {
        storage
            .remove_item(SESSION_STORAGE_KEY)
            .map_err(|_| StorageError::Access("remove_item()"))
    }
}
