use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{window, CustomEvent, CustomEventInit};
use wasm_bindgen::{JsValue, JsCast};
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use crate::{Route, styles};

pub const NOTIFICATION_EVENT: &str = "notification";

/// Fire an app-wide toast. Any component can call this; the `Base` shell
/// listens and renders it.
pub fn dispatch_notification(message: &str) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(message));
        if let Ok(event) =
            CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &event_init)
        {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let toast = use_state(|| None::<String>);

    {
        let toast = toast.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, NOTIFICATION_EVENT, move |event| {
                    if let Some(custom) = event.dyn_ref::<CustomEvent>() {
                        if let Some(message) = custom.detail().as_string() {
                            toast.set(Some(message));
                            let toast = toast.clone();
                            Timeout::new(4000, move || toast.set(None)).forget();
                        }
                    }
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                            {"Spin to Win Studio"}
                        </Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Admin} classes="text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400">
                                {"Admin"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="flex-grow pt-16">
                { props.children.clone() }
            </main>

            if let Some(message) = &*toast {
                <div class="fixed bottom-6 right-6 z-50 px-5 py-3 rounded-lg shadow-xl bg-gray-900 text-white dark:bg-white dark:text-gray-900 text-sm font-medium">
                    { message }
                </div>
            }

            <footer class={styles::FOOTER}>
                <div class="max-w-7xl mx-auto px-4 py-4 text-center">
                    <span class={styles::TEXT_SMALL}>{"Spin to Win Studio"}</span>
                </div>
            </footer>
        </div>
    }
}
