use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use shared::analytics::{format_redemption_rate, AnalyticsSummary};
use shared::api::ApiEnvelope;
use shared::constants::ANALYTICS_ENDPOINT;
use crate::config::get_api_base_url;
use crate::hooks::get_admin_key;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AnalyticsTabProps {
    pub page_id: String,
}

async fn fetch_summary(page_id: &str) -> Result<AnalyticsSummary, String> {
    let response = Request::get(&format!(
        "{}{}?page={}",
        get_api_base_url(),
        ANALYTICS_ENDPOINT,
        page_id
    ))
    .header("Authorization", &format!("Bearer {}", get_admin_key().unwrap_or_default()))
    .send()
    .await
    .map_err(|e| format!("Network error: {:?}", e))?;

    response
        .json::<ApiEnvelope<AnalyticsSummary>>()
        .await
        .map_err(|e| format!("Error parsing analytics: {:?}", e))?
        .into_result()
}

#[function_component(AnalyticsTab)]
pub fn analytics_tab(props: &AnalyticsTabProps) -> Html {
    let summary = use_state(|| None::<AnalyticsSummary>);
    let loading = use_state(|| true);
    let error = use_state(String::new);

    {
        let summary = summary.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.page_id.clone(), move |page_id| {
            let page_id = page_id.clone();
            loading.set(true);
            spawn_local(async move {
                match fetch_summary(&page_id).await {
                    Ok(data) => summary.set(Some(data)),
                    Err(err) => error.set(err),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="flex justify-center py-12">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        };
    }

    let Some(summary) = &*summary else {
        return html! {
            <div class={styles::CARD_ERROR}>
                { if error.is_empty() { "No analytics available yet".to_string() } else { (*error).clone() } }
            </div>
        };
    };

    let total_prize_count: u64 = summary.prize_counts.iter().map(|p| p.count).sum();

    html! {
        <div class="space-y-8">
            <div class={styles::SECTION_GRID}>
                <div class={styles::CARD_DASHBOARD}>
                    <p class={styles::TEXT_SMALL}>{"Page views"}</p>
                    <p class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">{summary.page_views}</p>
                </div>
                <div class={styles::CARD_DASHBOARD}>
                    <p class={styles::TEXT_SMALL}>{"Spins"}</p>
                    <p class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">{summary.spins}</p>
                </div>
                <div class={styles::CARD_DASHBOARD}>
                    <p class={styles::TEXT_SMALL}>{"Redemptions"}</p>
                    <p class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">{summary.redemptions}</p>
                </div>
                <div class={styles::CARD_DASHBOARD}>
                    <p class={styles::TEXT_SMALL}>{"Redemption rate"}</p>
                    <p class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">
                        {format_redemption_rate(summary.redemption_rate)}
                    </p>
                </div>
            </div>

            <div class={styles::CARD}>
                <h2 class={styles::CARD_TITLE}>{"Prizes shown"}</h2>
                if summary.prize_counts.is_empty() {
                    <p class={classes!("mt-4", styles::TEXT_SMALL)}>{"No spins recorded yet."}</p>
                } else {
                    <ul class="mt-4 space-y-3">
                        {
                            summary.prize_counts.iter().map(|prize| {
                                let share = if total_prize_count > 0 {
                                    prize.count as f64 / total_prize_count as f64 * 100.0
                                } else {
                                    0.0
                                };
                                html! {
                                    <li>
                                        <div class="flex justify-between items-center mb-1">
                                            <span class="text-sm font-medium text-gray-700 dark:text-gray-300">{&prize.label}</span>
                                            <span class={styles::TEXT_SMALL}>{format!("{} ({:.1}%)", prize.count, share)}</span>
                                        </div>
                                        <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5">
                                            <div
                                                class="bg-gradient-to-r from-blue-500 to-purple-600 h-2.5 rounded-full transition-all duration-500"
                                                style={format!("width: {:.1}%", share)}
                                            ></div>
                                        </div>
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
