use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use serde_json::Value;
use shared::api::ApiEnvelope;
use shared::constants::PRIZES_ENDPOINT;
use shared::wheel::{Prize, PrizeFill, SpinResult};
use crate::base::dispatch_notification;
use crate::components::SpinWheel;
use crate::config::get_api_base_url;
use crate::hooks::get_admin_key;
use crate::models::{direction_from_label, direction_label, PrizeDraft};
use crate::styles;

fn bearer() -> String {
    format!("Bearer {}", get_admin_key().unwrap_or_default())
}

async fn fetch_prizes() -> Result<Vec<Prize>, String> {
    let response = Request::get(&format!("{}{}", get_api_base_url(), PRIZES_ENDPOINT))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Vec<Prize>>>()
        .await
        .map_err(|e| format!("Error parsing prize list: {:?}", e))?
        .into_result()
}

async fn save_prize(prize: &Prize, existing: bool) -> Result<Prize, String> {
    let base = get_api_base_url();
    let builder = if existing {
        Request::put(&format!("{}{}/{}", base, PRIZES_ENDPOINT, prize.id))
    } else {
        Request::post(&format!("{}{}", base, PRIZES_ENDPOINT))
    };

    let response = builder
        .header("Authorization", &bearer())
        .header("Content-Type", "application/json")
        .json(prize)
        .map_err(|e| format!("Failed to build request: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    response
        .json::<ApiEnvelope<Prize>>()
        .await
        .map_err(|e| format!("Error parsing save response: {:?}", e))?
        .into_result()
}

async fn delete_prize(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}{}/{}", get_api_base_url(), PRIZES_ENDPOINT, id))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    let envelope = response
        .json::<ApiEnvelope<Value>>()
        .await
        .map_err(|e| format!("Error parsing delete response: {:?}", e))?;
    if envelope.success {
        Ok(())
    } else {
        Err(envelope.message.unwrap_or_else(|| "Delete failed".to_string()))
    }
}

fn share_of_total(prizes: &[Prize], prize: &Prize) -> String {
    let total: f64 = prizes.iter().map(|p| p.weight).sum();
    if total > 0.0 {
        format!("{:.1}%", prize.weight / total * 100.0)
    } else {
        format!("{:.1}%", 100.0 / prizes.len().max(1) as f64)
    }
}

fn swatch_color(prize: &Prize) -> String {
    match &prize.fill {
        PrizeFill::Solid { color } => color.clone(),
        PrizeFill::Gradient { from, .. } => from.clone(),
    }
}

#[function_component(PrizesTab)]
pub fn prizes_tab() -> Html {
    let prizes = use_state(Vec::<Prize>::new);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let draft = use_state(PrizeDraft::default);
    let form_error = use_state(String::new);
    let saving = use_state(|| false);

    {
        let prizes = prizes.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_prizes().await {
                    Ok(list) => prizes.set(list),
                    Err(err) => error.set(err),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let edit_field = |apply: fn(&mut PrizeDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };

    let on_label = edit_field(|d, v| d.label = v);
    let on_weight = edit_field(|d, v| d.weight = v);
    let on_color = edit_field(|d, v| d.color = v);
    let on_gradient_from = edit_field(|d, v| d.gradient_from = v);
    let on_gradient_to = edit_field(|d, v| d.gradient_to = v);
    let on_redirect = edit_field(|d, v| d.redirect_url = v);
    let on_bonus = edit_field(|d, v| d.bonus_code = v);
    let on_expires = edit_field(|d, v| d.expires_at = v);

    let on_toggle_gradient = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.use_gradient = input.checked();
                draft.set(next);
            }
        })
    };

    let on_direction = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let mut next = (*draft).clone();
                next.gradient_direction = direction_from_label(&select.value());
                draft.set(next);
            }
        })
    };

    let on_submit = {
        let prizes = prizes.clone();
        let draft = draft.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }

            let prize = match draft.to_prize() {
                Ok(prize) => prize,
                Err(message) => {
                    form_error.set(message);
                    return;
                }
            };
            form_error.set(String::new());
            saving.set(true);

            let existing = draft.id.is_some();
            let prizes = prizes.clone();
            let draft = draft.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();

            spawn_local(async move {
                match save_prize(&prize, existing).await {
                    Ok(saved) => {
                        let mut list = (*prizes).clone();
                        if let Some(slot) = list.iter_mut().find(|p| p.id == saved.id) {
                            *slot = saved;
                        } else {
                            list.push(saved);
                        }
                        prizes.set(list);
                        draft.set(PrizeDraft::default());
                        dispatch_notification("Prize saved");
                    }
                    Err(err) => form_error.set(err),
                }
                saving.set(false);
            });
        })
    };

    let on_edit = {
        let draft = draft.clone();
        Callback::from(move |prize: Prize| {
            draft.set(PrizeDraft::from_prize(&prize));
        })
    };

    let on_delete = {
        let prizes = prizes.clone();
        Callback::from(move |id: String| {
            let prizes = prizes.clone();
            spawn_local(async move {
                match delete_prize(&id).await {
                    Ok(()) => {
                        prizes.set((*prizes).iter().filter(|p| p.id != id).cloned().collect());
                        dispatch_notification("Prize deleted");
                    }
                    Err(err) => {
                        log::warn!("prize delete failed: {}", err);
                        dispatch_notification("Could not delete that prize");
                    }
                }
            });
        })
    };

    let on_preview_end = Callback::from(move |result: SpinResult| {
        dispatch_notification(&format!("Preview landed on {}", result.prize.label));
    });

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
            <div class="space-y-6">
                <div class={styles::CARD}>
                    <h2 class={styles::CARD_TITLE}>
                        { if draft.id.is_some() { "Edit prize" } else { "Add a prize" } }
                    </h2>

                    <form onsubmit={on_submit} class={styles::FORM}>
                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class={styles::TEXT_LABEL}>{"Label"}</label>
                                <input type="text" value={draft.label.clone()} oninput={on_label} class={styles::INPUT} />
                            </div>
                            <div>
                                <label class={styles::TEXT_LABEL}>{"Weight"}</label>
                                <input type="number" min="0" step="0.1" value={draft.weight.clone()} oninput={on_weight} class={styles::INPUT} />
                                <p class={styles::TEXT_HINT}>{"Relative odds. 0 means never (unless every weight is 0)."}</p>
                            </div>
                        </div>

                        <div>
                            <label class="flex items-center space-x-2">
                                <input type="checkbox" checked={draft.use_gradient} onchange={on_toggle_gradient} />
                                <span class={styles::TEXT_LABEL}>{"Gradient fill"}</span>
                            </label>
                        </div>

                        if draft.use_gradient {
                            <div class="grid grid-cols-3 gap-4">
                                <div>
                                    <label class={styles::TEXT_LABEL}>{"From"}</label>
                                    <input type="color" value={draft.gradient_from.clone()} oninput={on_gradient_from} class="mt-2 h-10 w-full rounded" />
                                </div>
                                <div>
                                    <label class={styles::TEXT_LABEL}>{"To"}</label>
                                    <input type="color" value={draft.gradient_to.clone()} oninput={on_gradient_to} class="mt-2 h-10 w-full rounded" />
                                </div>
                                <div>
                                    <label class={styles::TEXT_LABEL}>{"Direction"}</label>
                                    <select onchange={on_direction} class={styles::INPUT}>
                                        {
                                            ["horizontal", "vertical", "diagonal"].iter().map(|value| html! {
                                                <option
                                                    value={*value}
                                                    selected={direction_label(draft.gradient_direction) == *value}
                                                >
                                                    {*value}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </div>
                            </div>
                        } else {
                            <div>
                                <label class={styles::TEXT_LABEL}>{"Slice color"}</label>
                                <input type="color" value={draft.color.clone()} oninput={on_color} class="mt-2 h-10 w-full rounded" />
                            </div>
                        }

                        <div>
                            <label class={styles::TEXT_LABEL}>{"Redirect URL (optional)"}</label>
                            <input type="text" placeholder="https://..." value={draft.redirect_url.clone()} oninput={on_redirect} class={styles::INPUT} />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class={styles::TEXT_LABEL}>{"Bonus code (optional)"}</label>
                                <input type="text" value={draft.bonus_code.clone()} oninput={on_bonus} class={styles::INPUT} />
                            </div>
                            <div>
                                <label class={styles::TEXT_LABEL}>{"Code expires (optional)"}</label>
                                <input type="text" placeholder="2026-12-31T23:59:59Z" value={draft.expires_at.clone()} oninput={on_expires} class={styles::INPUT} />
                            </div>
                        </div>

                        if !form_error.is_empty() {
                            <p class={styles::TEXT_ERROR}>{(*form_error).clone()}</p>
                        }

                        <div class="flex gap-3">
                            <button type="submit" disabled={*saving} class={styles::BUTTON_PRIMARY}>
                                { if *saving { "Saving..." } else { "Save prize" } }
                            </button>
                            if draft.id.is_some() {
                                <button
                                    type="button"
                                    onclick={{
                                        let draft = draft.clone();
                                        move |_| draft.set(PrizeDraft::default())
                                    }}
                                    class={styles::BUTTON_SECONDARY}
                                >
                                    {"Cancel edit"}
                                </button>
                            }
                        </div>
                    </form>
                </div>

                <div class={styles::CARD}>
                    <h2 class={styles::CARD_TITLE}>{"Configured prizes"}</h2>

                    if *loading {
                        <div class="flex justify-center py-8">
                            <div class={styles::LOADING_SPINNER}></div>
                        </div>
                    } else if !error.is_empty() {
                        <div class={classes!("mt-4", styles::CARD_ERROR)}>{(*error).clone()}</div>
                    } else if prizes.is_empty() {
                        <p class={classes!("mt-4", styles::TEXT_SMALL)}>
                            {"No prizes yet. The wheel stays inert until at least one exists."}
                        </p>
                    } else {
                        <ul class="mt-4 divide-y divide-gray-200 dark:divide-gray-700">
                            {
                                prizes.iter().map(|prize| {
                                    let on_edit = on_edit.clone();
                                    let on_delete = on_delete.clone();
                                    let edit_prize = prize.clone();
                                    let delete_id = prize.id.clone();
                                    html! {
                                        <li class="py-3 flex items-center justify-between">
                                            <div class="flex items-center space-x-3">
                                                <span
                                                    class="w-4 h-4 rounded-full flex-shrink-0"
                                                    style={format!("background-color: {};", swatch_color(prize))}
                                                ></span>
                                                <div>
                                                    <div class="font-medium text-gray-900 dark:text-white">{&prize.label}</div>
                                                    <div class={styles::TEXT_SMALL}>
                                                        {format!("weight {} · {}", prize.weight, share_of_total(&prizes, prize))}
                                                    </div>
                                                </div>
                                            </div>
                                            <div class="flex items-center space-x-2">
                                                <button
                                                    onclick={move |_| on_edit.emit(edit_prize.clone())}
                                                    class={styles::BUTTON_SECONDARY}
                                                >
                                                    {"Edit"}
                                                </button>
                                                <button
                                                    onclick={move |_| on_delete.emit(delete_id.clone())}
                                                    class={styles::BUTTON_DANGER}
                                                >
                                                    {"Delete"}
                                                </button>
                                            </div>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                </div>
            </div>

            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Live preview"}</h2>
                <p class={classes!("mt-1", "mb-6", styles::TEXT_SMALL)}>
                    {"Spins here are local only; nothing is recorded."}
                </p>
                <SpinWheel
                    prizes={(*prizes).clone()}
                    confetti={false}
                    on_spin_end={on_preview_end}
                />
            </div>
        </div>
    }
}
