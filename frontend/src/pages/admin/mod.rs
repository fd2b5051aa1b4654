mod analytics;
mod content;
mod keys;
mod login;
mod prizes;

use yew::prelude::*;
use crate::base::Base;
use crate::hooks::{clear_admin_key, use_admin_key};
use crate::styles;

use analytics::AnalyticsTab;
use content::ContentTab;
use keys::KeysTab;
use login::AdminLogin;
use prizes::PrizesTab;

#[derive(PartialEq, Clone, Copy)]
pub enum Tab {
    Prizes,
    Content,
    Keys,
    Analytics,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Prizes => "Prizes",
            Tab::Content => "Page content",
            Tab::Keys => "Access keys",
            Tab::Analytics => "Analytics",
        }
    }
}

const TABS: [Tab; 4] = [Tab::Prizes, Tab::Content, Tab::Keys, Tab::Analytics];

#[function_component(Admin)]
pub fn admin() -> Html {
    let auth = use_admin_key();
    let signed_in = use_state(|| false);
    let page_id = use_state(|| None::<String>);
    let active_tab = use_state(|| Tab::Prizes);

    let on_login = {
        let signed_in = signed_in.clone();
        let page_id = page_id.clone();
        Callback::from(move |tenant_page: Option<String>| {
            page_id.set(tenant_page);
            signed_in.set(true);
        })
    };

    let logout = {
        let signed_in = signed_in.clone();
        Callback::from(move |_| {
            clear_admin_key();
            signed_in.set(false);
        })
    };

    if auth.loading {
        return html! {
            <Base>
                <div class="flex justify-center py-24">
                    <div class={styles::LOADING_SPINNER}></div>
                </div>
            </Base>
        };
    }

    if !auth.verified && !*signed_in {
        return html! {
            <Base>
                <AdminLogin on_success={on_login} />
            </Base>
        };
    }

    let effective_page_id = (*page_id)
        .clone()
        .or_else(|| auth.page_id.clone())
        .unwrap_or_else(|| "default".to_string());

    let switch_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="flex items-center justify-between mb-8">
                    <h1 class={styles::TEXT_H1}>{"Campaign dashboard"}</h1>
                    <button onclick={logout} class={styles::BUTTON_SECONDARY}>
                        {"Sign out"}
                    </button>
                </div>

                <div class="flex space-x-4 mb-8 overflow-x-auto pb-2">
                    {
                        TABS.iter().map(|tab| {
                            let tab = *tab;
                            let switch_tab = switch_tab.clone();
                            let class = if *active_tab == tab {
                                styles::TAB_ACTIVE
                            } else {
                                styles::TAB_INACTIVE
                            };
                            html! {
                                <button
                                    onclick={move |_| switch_tab.emit(tab)}
                                    class={classes!("px-4", "py-2", "rounded-lg", "transition-all", "whitespace-nowrap", class)}
                                >
                                    { tab.label() }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                {
                    match *active_tab {
                        Tab::Prizes => html! { <PrizesTab /> },
                        Tab::Content => html! { <ContentTab page_id={effective_page_id.clone()} /> },
                        Tab::Keys => html! { <KeysTab /> },
                        Tab::Analytics => html! { <AnalyticsTab page_id={effective_page_id} /> },
                    }
                }
            </div>
        </Base>
    }
}
