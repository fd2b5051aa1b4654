use yew::prelude::*;
use web_sys::window;
use shared::constants::COOKIE_CONSENT_STORAGE;
use crate::styles;

/// Consent banner shown on public landing pages until acknowledged. The
/// acknowledgement persists in localStorage across visits.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let acknowledged = use_state(|| {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(COOKIE_CONSENT_STORAGE).ok().flatten())
            .is_some()
    });

    if *acknowledged {
        return html! {};
    }

    let accept = {
        let acknowledged = acknowledged.clone();
        Callback::from(move |_| {
            if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(COOKIE_CONSENT_STORAGE, "accepted");
            }
            acknowledged.set(true);
        })
    };

    html! {
        <div class="fixed bottom-0 inset-x-0 z-50 bg-white/95 dark:bg-gray-900/95 backdrop-blur-md border-t border-gray-200 dark:border-gray-700 px-4 py-4">
            <div class="max-w-3xl mx-auto flex flex-col sm:flex-row items-center gap-4">
                <p class={classes!("flex-grow", styles::TEXT_SMALL)}>
                    {"This page stores a small flag in your browser so the wheel knows you already played. No tracking cookies are set."}
                </p>
                <button onclick={accept} class={styles::BUTTON_PRIMARY}>
                    {"Got it"}
                </button>
            </div>
        </div>
    }
}
