//! Session from browser storage
//!
//! The login page stores `accessToken`, `userId` and a JSON `roles` array
//! in localStorage; the role is resolved once here.

use food_listing::Session;
use leptos::prelude::window;

pub fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

pub fn load_session() -> Session {
    let Some(storage) = local_storage() else {
        return Session::guest();
    };
    let read = |key: &str| storage.get_item(key).ok().flatten();

    let roles: Vec<String> = read("roles")
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    Session::new(read("userId"), read("accessToken"), &roles)
}
