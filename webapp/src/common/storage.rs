use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use interact::theme::{STORAGE_KEY, Theme};

// every key this site writes is namespaced, so that several sites served
// from one origin do not read each other's preferences
fn storage_key(key: &str) -> String {
    format!("showcase_{}", key)
}

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case and is not logged
pub fn get_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    LocalStorage::get(key.clone())
        .map_err(|err| match err {
            gloo_storage::errors::StorageError::KeyNotFound(_) => (),
            err => console_error!(format!("Failed to fetch local storage {key}: {err}")),
        })
        .ok()
}

pub fn stored_theme() -> Option<Theme> {
    get_local_storage(STORAGE_KEY)
}

pub fn store_theme(theme: Theme) {
    set_local_storage(STORAGE_KEY, theme)
}
