use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use serde_json::Value;
use shared::api::ApiEnvelope;
use shared::constants::PUBLIC_PAGE_ENDPOINT;
use shared::page::{Branding, PageContent, PageFlags, PublicPage, UpdatePageRequest};
use shared::validation::validate_hex_color;
use crate::base::dispatch_notification;
use crate::config::get_api_base_url;
use crate::hooks::get_admin_key;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContentTabProps {
    pub page_id: String,
}

async fn load_page(page_id: &str) -> Result<PublicPage, String> {
    let response = Request::get(&format!(
        "{}{}/{}",
        get_api_base_url(),
        PUBLIC_PAGE_ENDPOINT,
        page_id
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {:?}", e))?;

    response
        .json::<ApiEnvelope<PublicPage>>()
        .await
        .map_err(|e| format!("Error parsing page: {:?}", e))?
        .into_result()
}

async fn save_page(page_id: &str, update: &UpdatePageRequest) -> Result<(), String> {
    let response = Request::put(&format!(
        "{}{}/{}",
        get_api_base_url(),
        PUBLIC_PAGE_ENDPOINT,
        page_id
    ))
    .header("Authorization", &format!("Bearer {}", get_admin_key().unwrap_or_default()))
    .header("Content-Type", "application/json")
    .json(update)
    .map_err(|e| format!("Failed to build request: {:?}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {:?}", e))?;

    let envelope = response
        .json::<ApiEnvelope<Value>>()
        .await
        .map_err(|e| format!("Error parsing save response: {:?}", e))?;
    if envelope.success {
        Ok(())
    } else {
        Err(envelope.message.unwrap_or_else(|| "Save failed".to_string()))
    }
}

#[function_component(ContentTab)]
pub fn content_tab(props: &ContentTabProps) -> Html {
    let content = use_state(PageContent::default);
    let branding = use_state(Branding::default);
    let flags = use_state(PageFlags::default);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let saving = use_state(|| false);

    {
        let content = content.clone();
        let branding = branding.clone();
        let flags = flags.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.page_id.clone(), move |page_id| {
            let page_id = page_id.clone();
            spawn_local(async move {
                match load_page(&page_id).await {
                    Ok(page) => {
                        content.set(page.content);
                        branding.set(page.branding);
                        flags.set(page.flags);
                    }
                    Err(err) => error.set(err),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let text_field = |apply: fn(&mut PageContent, String)| {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*content).clone();
                apply(&mut next, input.value());
                content.set(next);
            }
        })
    };

    let on_headline = text_field(|c, v| c.headline = v);
    let on_subheadline = text_field(|c, v| c.subheadline = v);
    let on_button_label = text_field(|c, v| c.button_label = v);
    let on_footer_note = text_field(|c, v| c.footer_note = v);

    let on_body = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*content).clone();
                next.body = area.value();
                content.set(next);
            }
        })
    };

    let color_field = |apply: fn(&mut Branding, String)| {
        let branding = branding.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*branding).clone();
                apply(&mut next, input.value());
                branding.set(next);
            }
        })
    };

    let on_primary = color_field(|b, v| b.primary_color = v);
    let on_accent = color_field(|b, v| b.accent_color = v);

    let on_logo = {
        let branding = branding.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*branding).clone();
                let value = input.value();
                next.logo_url = if value.trim().is_empty() { None } else { Some(value) };
                branding.set(next);
            }
        })
    };

    let flag_field = |apply: fn(&mut PageFlags, bool)| {
        let flags = flags.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = *flags;
                apply(&mut next, input.checked());
                flags.set(next);
            }
        })
    };

    let on_wheel_enabled = flag_field(|f, v| f.wheel_enabled = v);
    let on_sound_enabled = flag_field(|f, v| f.sound_enabled = v);
    let on_confetti = flag_field(|f, v| f.confetti_enabled = v);
    let on_one_spin = flag_field(|f, v| f.one_spin_per_visit = v);

    let on_save = {
        let page_id = props.page_id.clone();
        let content = content.clone();
        let branding = branding.clone();
        let flags = flags.clone();
        let error = error.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }

            if validate_hex_color(&branding.primary_color).is_err()
                || validate_hex_color(&branding.accent_color).is_err()
            {
                error.set("Brand colors must be hex values like #2563eb".to_string());
                return;
            }
            error.set(String::new());
            saving.set(true);

            let update = UpdatePageRequest {
                content: (*content).clone(),
                branding: (*branding).clone(),
                flags: *flags,
            };
            let page_id = page_id.clone();
            let error = error.clone();
            let saving = saving.clone();

            spawn_local(async move {
                match save_page(&page_id, &update).await {
                    Ok(()) => dispatch_notification("Page content saved"),
                    Err(err) => error.set(err),
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! {
            <div class="flex justify-center py-12">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        };
    }

    html! {
        <form onsubmit={on_save} class="max-w-3xl space-y-6">
            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Landing copy"}</h2>
                <div class={styles::FORM}>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Headline"}</label>
                        <input type="text" value={content.headline.clone()} oninput={on_headline} class={styles::INPUT} />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Subheadline"}</label>
                        <input type="text" value={content.subheadline.clone()} oninput={on_subheadline} class={styles::INPUT} />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Body"}</label>
                        <textarea rows="4" value={content.body.clone()} oninput={on_body} class={styles::INPUT} />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class={styles::TEXT_LABEL}>{"Spin button label"}</label>
                            <input type="text" placeholder="Spin to Win" value={content.button_label.clone()} oninput={on_button_label} class={styles::INPUT} />
                        </div>
                        <div>
                            <label class={styles::TEXT_LABEL}>{"Footer note"}</label>
                            <input type="text" value={content.footer_note.clone()} oninput={on_footer_note} class={styles::INPUT} />
                        </div>
                    </div>
                </div>
            </div>

            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Branding"}</h2>
                <div class="mt-4 grid grid-cols-3 gap-4">
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Primary color"}</label>
                        <input type="color" value={branding.primary_color.clone()} oninput={on_primary} class="mt-2 h-10 w-full rounded" />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Accent color"}</label>
                        <input type="color" value={branding.accent_color.clone()} oninput={on_accent} class="mt-2 h-10 w-full rounded" />
                    </div>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Logo URL"}</label>
                        <input type="text" placeholder="https://..." value={branding.logo_url.clone().unwrap_or_default()} oninput={on_logo} class={styles::INPUT} />
                    </div>
                </div>
            </div>

            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Behavior"}</h2>
                <div class="mt-4 space-y-3">
                    <label class="flex items-center space-x-2">
                        <input type="checkbox" checked={flags.wheel_enabled} onchange={on_wheel_enabled} />
                        <span class={styles::TEXT_LABEL}>{"Wheel enabled"}</span>
                    </label>
                    <label class="flex items-center space-x-2">
                        <input type="checkbox" checked={flags.one_spin_per_visit} onchange={on_one_spin} />
                        <span class={styles::TEXT_LABEL}>{"One spin per visit"}</span>
                    </label>
                    <label class="flex items-center space-x-2">
                        <input type="checkbox" checked={flags.sound_enabled} onchange={on_sound_enabled} />
                        <span class={styles::TEXT_LABEL}>{"Sound effects"}</span>
                    </label>
                    <label class="flex items-center space-x-2">
                        <input type="checkbox" checked={flags.confetti_enabled} onchange={on_confetti} />
                        <span class={styles::TEXT_LABEL}>{"Confetti on win"}</span>
                    </label>
                </div>
            </div>

            if !error.is_empty() {
                <div class={styles::CARD_ERROR}>{(*error).clone()}</div>
            }

            <button type="submit" disabled={*saving} class={styles::BUTTON_PRIMARY}>
                { if *saving { "Saving..." } else { "Save page" } }
            </button>
        </form>
    }
}
