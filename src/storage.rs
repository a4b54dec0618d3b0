//! Persisted key-value storage for session continuity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `localStorage` carries the session token and matric number
//! across page reloads; the navigation guard and the session store read it,
//! and the login/logout flows write it. Storage failures never propagate:
//! reads degrade to `None` and writes log a warning, so callers treat a
//! broken store the same as an empty one.
//!
//! Off-browser builds (native tests, tooling) back the same API with an
//! in-process map so storage-coupled flows stay observable under
//! `cargo test`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

/// Session token issued by the auth service. Written by the login page,
/// removed by `logout`.
pub const KEY_SESSION_TOKEN: &str = "session_id_utm_ttms";

/// Matric number of the signed-in user. Written by the login page alongside
/// the token.
pub const KEY_MATRIC_NO: &str = "matric_no";

/// Presence flag set for administrator sessions; only its existence matters.
/// Removed by `logout` when present.
pub const KEY_IS_ADMIN: &str = "is_admin";

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Read the stored value for `key`.
///
/// Returns `None` when the key is absent or storage is unavailable. Values
/// are returned as stored; callers decide how to treat empty strings.
#[must_use]
pub fn get(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
        None
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE.with(|store| store.borrow().get(key).cloned())
    }
}

/// Store `value` under `key`, replacing any previous value.
pub fn set(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("storage write failed for {key}: {err:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

/// Remove `key` from storage. Removing an absent key is a no-op.
pub fn remove(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("storage remove failed for {key}: {err:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}
