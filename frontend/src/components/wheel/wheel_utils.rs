use yew::prelude::*;
use chrono::{DateTime, Utc};
use shared::wheel::Prize;

/// Human-friendly expiry for a bonus code, from the RFC 3339 instant on the
/// prize. Unparseable values fall back to the raw string rather than hiding
/// the expiry entirely.
pub fn format_expiry(expires_at: &str) -> String {
    match DateTime::parse_from_rfc3339(expires_at) {
        Ok(instant) => {
            let utc = instant.with_timezone(&Utc);
            format!("valid until {}", utc.format("%b %e, %Y"))
        }
        Err(_) => format!("valid until {}", expires_at),
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub label: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning...".to_string()
    } else if props.disabled {
        "Come back later".to_string()
    } else {
        props.label.clone()
    };

    let is_disabled = props.is_spinning || props.disabled;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!(
            "relative",
            "overflow-hidden",
            "rounded-full",
            "w-full",
            button_class,
        )}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prize: Option<Prize>,
    pub show: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if !props.show {
        return html! {};
    }

    let Some(prize) = &props.prize else {
        return html! {};
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <div class="flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-yellow-400 to-orange-500 text-white font-bold text-xl shadow-lg border-2 border-orange-300 animate-bounce">
                <span>{format!("You won: {}!", prize.label)}</span>
            </div>

            if let Some(code) = &prize.bonus_code {
                <div class="mt-4 flex flex-col items-center">
                    <span class="text-sm text-gray-600 dark:text-gray-400">{"Your bonus code"}</span>
                    <code class="mt-1 px-4 py-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-lg font-mono tracking-widest text-gray-900 dark:text-white select-all">
                        {code}
                    </code>
                    if let Some(expires_at) = &prize.expires_at {
                        <span class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                            {format_expiry(expires_at)}
                        </span>
                    }
                </div>
            }

            if let Some(url) = &prize.redirect_url {
                <a
                    href={url.clone()}
                    class="mt-6 inline-flex items-center justify-center px-6 py-3 rounded-full font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300"
                >
                    {"Claim your prize"}
                </a>
            }
        </div>
    }
}
