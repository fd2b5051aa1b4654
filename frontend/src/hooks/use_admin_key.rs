use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use web_sys::window;
use shared::admin::VerifyKeyResponse;
use shared::api::ApiEnvelope;
use shared::constants::{ADMIN_KEYS_ENDPOINT, ADMIN_KEY_STORAGE};
use crate::config::get_api_base_url;

#[derive(Clone, PartialEq)]
pub struct AdminKeyInfo {
    pub verified: bool,
    pub page_id: Option<String>,
    pub loading: bool,
}

/// Read the stored tenant secret, if any.
pub fn get_admin_key() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(ADMIN_KEY_STORAGE).ok().flatten())
        .filter(|key| !key.is_empty())
}

pub fn store_admin_key(key: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(ADMIN_KEY_STORAGE, key);
    }
}

pub fn clear_admin_key() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(ADMIN_KEY_STORAGE);
    }
}

/// Verify a secret against the key API. Used by the login form directly and
/// by [`use_admin_key`] on mount.
pub async fn verify_admin_key(key: &str) -> Result<VerifyKeyResponse, String> {
    let response = Request::get(&format!("{}{}/verify", get_api_base_url(), ADMIN_KEYS_ENDPOINT))
        .header("Authorization", &format!("Bearer {}", key))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<VerifyKeyResponse>>()
        .await
        .map_err(|e| format!("Error parsing verify response: {:?}", e))?
        .into_result()
}

/// Checks the stored admin secret once on mount. Components re-run their own
/// verification after a fresh login; this hook only answers "is the visitor
/// already signed in".
#[hook]
pub fn use_admin_key() -> AdminKeyInfo {
    let verified = use_state(|| false);
    let page_id = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let verified = verified.clone();
        let page_id = page_id.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let key = match get_admin_key() {
                    Some(key) => key,
                    None => {
                        loading.set(false);
                        return;
                    }
                };

                match verify_admin_key(&key).await {
                    Ok(status) if status.valid => {
                        verified.set(true);
                        page_id.set(status.page_id);
                    }
                    Ok(_) => {
                        // Key was revoked since the last visit.
                        clear_admin_key();
                    }
                    Err(err) => {
                        log::warn!("admin key verification failed: {}", err);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    AdminKeyInfo {
        verified: *verified,
        page_id: (*page_id).clone(),
        loading: *loading,
    }
}
