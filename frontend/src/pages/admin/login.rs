use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use shared::constants::INVALID_KEY_ERROR;
use shared::validation::validate_secret_key;
use crate::hooks::{store_admin_key, verify_admin_key};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    /// Fired with the tenant's page id (if the key is scoped to one).
    pub on_success: Callback<Option<String>>,
}

#[function_component(AdminLogin)]
pub fn admin_login(props: &AdminLoginProps) -> Html {
    let key = use_state(String::new);
    let error = use_state(String::new);
    let checking = use_state(|| false);

    let on_input = {
        let key = key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                key.set(input.value());
            }
        })
    };

    let on_submit = {
        let key = key.clone();
        let error = error.clone();
        let checking = checking.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *checking {
                return;
            }

            let secret = (*key).trim().to_string();
            if validate_secret_key(&secret).is_err() {
                error.set(INVALID_KEY_ERROR.to_string());
                return;
            }

            error.set(String::new());
            checking.set(true);

            let error = error.clone();
            let checking = checking.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match verify_admin_key(&secret).await {
                    Ok(status) if status.valid => {
                        store_admin_key(&secret);
                        on_success.emit(status.page_id);
                    }
                    Ok(_) => error.set(INVALID_KEY_ERROR.to_string()),
                    Err(err) => {
                        log::warn!("key verification failed: {}", err);
                        error.set(INVALID_KEY_ERROR.to_string());
                    }
                }
                checking.set(false);
            });
        })
    };

    html! {
        <div class={styles::FLEX_CENTER}>
            <div class={styles::AUTH_CARD}>
                <div class="mb-6 text-center">
                    <h2 class={styles::TEXT_H2}>{"Sign in"}</h2>
                    <p class={classes!("mt-2", styles::TEXT_SMALL)}>
                        {"Paste the access key you received for your campaign."}
                    </p>
                </div>

                <form onsubmit={on_submit} class={styles::FORM}>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Access key"}</label>
                        <input
                            type="password"
                            value={(*key).clone()}
                            oninput={on_input}
                            placeholder="••••••••••••••••••••••••"
                            class={if error.is_empty() { styles::INPUT } else { styles::INPUT_ERROR }}
                        />
                        if !error.is_empty() {
                            <p class={classes!("mt-2", styles::TEXT_ERROR)}>{(*error).clone()}</p>
                        }
                    </div>

                    <button type="submit" disabled={*checking} class={styles::AUTH_BUTTON}>
                        { if *checking { "Checking..." } else { "Open dashboard" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
