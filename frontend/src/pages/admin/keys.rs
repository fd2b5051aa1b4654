use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use serde_json::Value;
use shared::admin::{AdminKey, CreateKeyRequest, CreateKeyResponse};
use shared::api::ApiEnvelope;
use shared::constants::ADMIN_KEYS_ENDPOINT;
use shared::validation::validate_label;
use crate::base::dispatch_notification;
use crate::config::get_api_base_url;
use crate::hooks::get_admin_key;
use crate::styles;

fn bearer() -> String {
    format!("Bearer {}", get_admin_key().unwrap_or_default())
}

async fn fetch_keys() -> Result<Vec<AdminKey>, String> {
    let response = Request::get(&format!("{}{}", get_api_base_url(), ADMIN_KEYS_ENDPOINT))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    response
        .json::<ApiEnvelope<Vec<AdminKey>>>()
        .await
        .map_err(|e| format!("Error parsing key list: {:?}", e))?
        .into_result()
}

async fn create_key(request: &CreateKeyRequest) -> Result<CreateKeyResponse, String> {
    let response = Request::post(&format!("{}{}", get_api_base_url(), ADMIN_KEYS_ENDPOINT))
        .header("Authorization", &bearer())
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| format!("Failed to build request: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    response
        .json::<ApiEnvelope<CreateKeyResponse>>()
        .await
        .map_err(|e| format!("Error parsing create response: {:?}", e))?
        .into_result()
}

async fn revoke_key(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}{}/{}", get_api_base_url(), ADMIN_KEYS_ENDPOINT, id))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    let envelope = response
        .json::<ApiEnvelope<Value>>()
        .await
        .map_err(|e| format!("Error parsing revoke response: {:?}", e))?;
    if envelope.success {
        Ok(())
    } else {
        Err(envelope.message.unwrap_or_else(|| "Revoke failed".to_string()))
    }
}

#[function_component(KeysTab)]
pub fn keys_tab() -> Html {
    let keys = use_state(Vec::<AdminKey>::new);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let label = use_state(String::new);
    let page_scope = use_state(String::new);
    // The plaintext secret of a freshly created key; shown exactly once.
    let fresh_secret = use_state(|| None::<String>);
    let creating = use_state(|| false);

    {
        let keys = keys.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_keys().await {
                    Ok(list) => keys.set(list),
                    Err(err) => error.set(err),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_label = {
        let label = label.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                label.set(input.value());
            }
        })
    };

    let on_page_scope = {
        let page_scope = page_scope.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                page_scope.set(input.value());
            }
        })
    };

    let on_create = {
        let keys = keys.clone();
        let label = label.clone();
        let page_scope = page_scope.clone();
        let fresh_secret = fresh_secret.clone();
        let error = error.clone();
        let creating = creating.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *creating {
                return;
            }
            if validate_label(&label).is_err() {
                error.set("Give the key a short label".to_string());
                return;
            }
            error.set(String::new());
            creating.set(true);

            let request = CreateKeyRequest {
                label: (*label).trim().to_string(),
                page_id: match (*page_scope).trim() {
                    "" => None,
                    id => Some(id.to_string()),
                },
            };

            let keys = keys.clone();
            let label = label.clone();
            let page_scope = page_scope.clone();
            let fresh_secret = fresh_secret.clone();
            let error = error.clone();
            let creating = creating.clone();

            spawn_local(async move {
                match create_key(&request).await {
                    Ok(created) => {
                        let mut list = (*keys).clone();
                        list.push(created.key);
                        keys.set(list);
                        fresh_secret.set(Some(created.secret));
                        label.set(String::new());
                        page_scope.set(String::new());
                        dispatch_notification("Access key created");
                    }
                    Err(err) => error.set(err),
                }
                creating.set(false);
            });
        })
    };

    let on_revoke = {
        let keys = keys.clone();
        Callback::from(move |id: String| {
            let keys = keys.clone();
            spawn_local(async move {
                match revoke_key(&id).await {
                    Ok(()) => {
                        keys.set((*keys).iter().filter(|k| k.id != id).cloned().collect());
                        dispatch_notification("Access key revoked");
                    }
                    Err(err) => {
                        log::warn!("key revoke failed: {}", err);
                        dispatch_notification("Could not revoke that key");
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-3xl space-y-6">
            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Create an access key"}</h2>
                <p class={classes!("mt-1", styles::TEXT_SMALL)}>
                    {"Each tenant signs in with their own key. Scope a key to a page id to \
                      limit what its holder can edit."}
                </p>

                <form onsubmit={on_create} class={styles::FORM}>
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class={styles::TEXT_LABEL}>{"Label"}</label>
                            <input type="text" placeholder="Acme spring campaign" value={(*label).clone()} oninput={on_label} class={styles::INPUT} />
                        </div>
                        <div>
                            <label class={styles::TEXT_LABEL}>{"Page id (optional)"}</label>
                            <input type="text" value={(*page_scope).clone()} oninput={on_page_scope} class={styles::INPUT} />
                        </div>
                    </div>
                    <button type="submit" disabled={*creating} class={styles::BUTTON_PRIMARY}>
                        { if *creating { "Creating..." } else { "Create key" } }
                    </button>
                </form>

                if let Some(secret) = &*fresh_secret {
                    <div class={classes!("mt-4", styles::ALERT_SUCCESS)}>
                        <p class="font-medium">{"Copy this key now — it will not be shown again."}</p>
                        <code class="mt-2 block px-3 py-2 rounded bg-white/60 dark:bg-black/30 font-mono text-sm select-all break-all">
                            {secret.clone()}
                        </code>
                    </div>
                }

                if !error.is_empty() {
                    <div class={classes!("mt-4", styles::CARD_ERROR)}>{(*error).clone()}</div>
                }
            </div>

            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Active keys"}</h2>

                if *loading {
                    <div class="flex justify-center py-8">
                        <div class={styles::LOADING_SPINNER}></div>
                    </div>
                } else if keys.is_empty() {
                    <p class={classes!("mt-4", styles::TEXT_SMALL)}>{"No keys yet."}</p>
                } else {
                    <ul class="mt-4 divide-y divide-gray-200 dark:divide-gray-700">
                        {
                            keys.iter().map(|key| {
                                let on_revoke = on_revoke.clone();
                                let id = key.id.clone();
                                html! {
                                    <li class="py-3 flex items-center justify-between">
                                        <div>
                                            <div class="font-medium text-gray-900 dark:text-white">{&key.label}</div>
                                            <div class={styles::TEXT_SMALL}>
                                                {
                                                    match &key.page_id {
                                                        Some(page) => format!("scoped to {} · created {}", page, key.created_at),
                                                        None => format!("all pages · created {}", key.created_at),
                                                    }
                                                }
                                            </div>
                                        </div>
                                        <button
                                            onclick={move |_| on_revoke.emit(id.clone())}
                                            class={styles::BUTTON_DANGER}
                                        >
                                            {"Revoke"}
                                        </button>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                }
            </div>
        </div>
    }
}
