//! Thin wrappers over the host page: embedded configuration, the stored
//! session token, confirmation dialogs and navigation.

use common::config::ApiConfig;
use common::session::Session;
use log::warn;
use web_sys::Storage;

const CONFIG_META: &str = "meta[name=\"app-config\"]";

/// Reads `<meta name="app-config" content='{...}'>`; defaults otherwise.
pub fn load_config() -> ApiConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(CONFIG_META).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    match raw {
        Some(raw) => ApiConfig::from_json(&raw).unwrap_or_else(|err| {
            warn!("ignoring malformed app-config: {}", err);
            ApiConfig::default()
        }),
        None => ApiConfig::default(),
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_session(config: &ApiConfig) -> Session {
    let token = local_storage().and_then(|s| s.get_item(&config.token_storage_key).ok().flatten());
    Session::new(token)
}

/// Forgets the stored tokens and sends the browser to the login page.
pub fn logout(config: &ApiConfig) {
    if let Some(storage) = local_storage() {
        for key in [&config.token_storage_key, &config.refresh_storage_key] {
            if let Err(err) = storage.remove_item(key) {
                warn!("could not clear {} from local storage: {:?}", key, err);
            }
        }
    }
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(&config.login_path) {
            warn!("redirect to {} failed: {:?}", config.login_path, err);
        }
    }
}

/// Blocking browser confirmation. Anything but an explicit "OK" is a no.
pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
