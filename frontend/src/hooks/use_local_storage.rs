use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::PersistentSlot;
use yew::prelude::*;

use crate::services::local_store::LocalStore;
use crate::services::logging::Logger;

/// Read-only view of a stored value.
///
/// Every `set` allocates a new snapshot, so two snapshots are equal only if
/// they are the same allocation. Comparing them never walks the value.
pub struct Snapshot<T>(Rc<T>);

impl<T> Snapshot<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub struct UseLocalStorageHandle<T> {
    pub value: Snapshot<T>,
    pub set: Callback<T>,
}

/// State mirrored into one local storage slot.
///
/// The initial value is read once; every `set` writes the whole value back
/// before updating the state.
#[hook]
pub fn use_local_storage<T, F>(key: &str, default: F) -> UseLocalStorageHandle<T>
where
    T: Serialize + DeserializeOwned + 'static,
    F: FnOnce() -> T,
{
    let slot = use_memo(key.to_string(), |key| PersistentSlot::new(LocalStore, key.clone()));

    let state = {
        let slot = slot.clone();
        use_state(move || Snapshot::new(slot.read(default())))
    };

    let set = {
        let state = state.clone();
        use_callback(slot, move |value: T, slot| {
            if let Err(e) = slot.write(&value) {
                Logger::error_with_component(
                    "storage",
                    &format!("Failed to persist '{}': {}", slot.key(), e),
                );
            }
            state.set(Snapshot::new(value));
        })
    };

    UseLocalStorageHandle {
        value: (*state).clone(),
        set,
    }
}
