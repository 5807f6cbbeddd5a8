//! Page configuration
//!
//! Defaults from `ListingConfig`, optionally overridden by a JSON object in
//! localStorage under `takafulConfig`.

use food_listing::ListingConfig;
use leptos::prelude::window;
use tracing::warn;

use crate::session::local_storage;

const CONFIG_KEY: &str = "takafulConfig";

pub fn load_config() -> ListingConfig {
    let mut config = local_storage()
        .and_then(|storage| storage.get_item(CONFIG_KEY).ok().flatten())
        .and_then(|json| match ListingConfig::from_json(&json) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(%err, "ignoring invalid {} override", CONFIG_KEY);
                None
            }
        })
        .unwrap_or_default();

    // reqwest needs an absolute URL
    if config.api_base_url.starts_with('/') {
        if let Ok(origin) = window().location().origin() {
            config.api_base_url = format!("{}{}", origin, config.api_base_url);
        }
    }
    config
}
