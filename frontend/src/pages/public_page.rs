use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use web_sys::window;
use chrono::Utc;
use serde_json::Value;
use shared::analytics::{AnalyticsEvent, EventKind};
use shared::api::ApiEnvelope;
use shared::constants::{ANALYTICS_ENDPOINT, SPINS_ENDPOINT, SPIN_REDEEMED_STORAGE_PREFIX};
use shared::wheel::{Prize, RecordSpinRequest, SpinResult};
use crate::components::{CookieBanner, SpinWheel};
use crate::components::wheel::ResultDisplay;
use crate::config::get_api_base_url;
use crate::hooks::{use_page_config, PageConfigState};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PublicPageProps {
    pub id: String,
}

fn redeemed_storage_key(page_id: &str) -> String {
    format!("{}:{}", SPIN_REDEEMED_STORAGE_PREFIX, page_id)
}

fn has_spun_before(page_id: &str) -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(&redeemed_storage_key(page_id)).ok().flatten())
        .is_some()
}

/// Persist the won prize so a revisit within the same browser still shows
/// the result (and its bonus code) instead of a silent dead wheel.
fn mark_spun(page_id: &str, prize: &Prize) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let stored = serde_json::to_string(prize).unwrap_or_else(|_| Utc::now().to_rfc3339());
        let _ = storage.set_item(&redeemed_storage_key(page_id), &stored);
    }
}

fn stored_prize(page_id: &str) -> Option<Prize> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(&redeemed_storage_key(page_id)).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Fire-and-forget analytics event. A lost event is logged, never surfaced.
fn send_analytics_event(page_id: String, kind: EventKind, prize_id: Option<String>) {
    spawn_local(async move {
        let event = AnalyticsEvent {
            page_id,
            kind,
            prize_id,
            occurred_at: Utc::now().to_rfc3339(),
        };
        let request = match Request::post(&format!("{}{}", get_api_base_url(), ANALYTICS_ENDPOINT))
            .header("Content-Type", "application/json")
            .json(&event)
        {
            Ok(request) => request,
            Err(e) => {
                log::error!("failed to build analytics request: {:?}", e);
                return;
            }
        };
        if let Err(e) = request.send().await {
            log::error!("analytics event not delivered: {:?}", e);
        }
    });
}

fn record_spin(page_id: String, result: &SpinResult) {
    let body = RecordSpinRequest {
        page_id,
        prize_id: result.prize.id.clone(),
        rotation: result.rotation,
        occurred_at: Utc::now().to_rfc3339(),
    };
    spawn_local(async move {
        let request = match Request::post(&format!("{}{}", get_api_base_url(), SPINS_ENDPOINT))
            .header("Content-Type", "application/json")
            .json(&body)
        {
            Ok(request) => request,
            Err(e) => {
                log::error!("failed to build spin record request: {:?}", e);
                return;
            }
        };
        match request.send().await {
            Ok(response) => {
                // The envelope is checked only so a rejected record shows up
                // in the console during development.
                if let Ok(envelope) = response.json::<ApiEnvelope<Value>>().await {
                    if !envelope.success {
                        log::warn!(
                            "spin record rejected: {}",
                            envelope.message.unwrap_or_default()
                        );
                    }
                }
            }
            Err(e) => log::error!("spin record not delivered: {:?}", e),
        }
    });
}

#[function_component(PublicPage)]
pub fn public_page(props: &PublicPageProps) -> Html {
    let config = use_page_config(props.id.clone());
    let already_spun = use_state(|| has_spun_before(&props.id));
    let won_prize = use_state(|| stored_prize(&props.id));
    let show_result = use_state(|| {
        // A returning visitor with a stored result sees it right away.
        stored_prize(&props.id).is_some()
    });

    {
        let page_id = props.id.clone();
        use_effect_with((), move |_| {
            send_analytics_event(page_id, EventKind::PageView, None);
            || ()
        });
    }

    let page = match &config {
        PageConfigState::Loading => {
            return html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            };
        }
        PageConfigState::Failed(message) => {
            return html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4">
                    <div class={styles::CARD_ERROR}>{message.clone()}</div>
                </div>
            };
        }
        PageConfigState::Loaded(page) => page.clone(),
    };

    let wheel_disabled = !page.flags.wheel_enabled
        || (page.flags.one_spin_per_visit && *already_spun);

    let on_spin_end = {
        let page_id = props.id.clone();
        let one_spin = page.flags.one_spin_per_visit;
        let already_spun = already_spun.clone();
        let won_prize = won_prize.clone();
        let show_result = show_result.clone();

        Callback::from(move |spin_result: SpinResult| {
            if one_spin {
                mark_spun(&page_id, &spin_result.prize);
                already_spun.set(true);
            }
            record_spin(page_id.clone(), &spin_result);
            send_analytics_event(
                page_id.clone(),
                EventKind::Spin,
                Some(spin_result.prize.id.clone()),
            );
            won_prize.set(Some(spin_result.prize));
            show_result.set(true);
        })
    };

    let background_style = format!(
        "background: linear-gradient(160deg, {}22, {}22);",
        page.branding.primary_color, page.branding.accent_color
    );

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900" style={background_style}>
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                if let Some(logo_url) = &page.branding.logo_url {
                    <div class="flex justify-center mb-8">
                        <img src={logo_url.clone()} alt="logo" class="h-12 w-auto" />
                    </div>
                }

                <div class="text-center mb-10">
                    <h1 class="text-4xl sm:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        { &page.content.headline }
                    </h1>
                    if !page.content.subheadline.is_empty() {
                        <p class="text-xl text-gray-600 dark:text-gray-300">
                            { &page.content.subheadline }
                        </p>
                    }
                </div>

                <div class="bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] border border-gray-100 dark:border-gray-700 backdrop-blur-sm">
                    <SpinWheel
                        prizes={page.prizes.clone()}
                        disabled={wheel_disabled}
                        muted={!page.flags.sound_enabled}
                        confetti={page.flags.confetti_enabled}
                        button_label={if page.content.button_label.is_empty() {
                            "Spin to Win".to_string()
                        } else {
                            page.content.button_label.clone()
                        }}
                        on_spin_end={on_spin_end}
                    />

                    <ResultDisplay prize={(*won_prize).clone()} show={*show_result} />

                    if *already_spun && won_prize.is_none() {
                        <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                            {"You already played on this visit. Thanks for spinning!"}
                        </p>
                    }
                </div>

                if !page.content.body.is_empty() {
                    <div class="mt-10 text-center">
                        <p class={styles::TEXT_BODY}>{ &page.content.body }</p>
                    </div>
                }

                if !page.content.footer_note.is_empty() {
                    <p class="mt-12 text-center text-xs text-gray-500 dark:text-gray-400">
                        { &page.content.footer_note }
                    </p>
                }
            </div>

            <CookieBanner />
        </div>
    }
}
