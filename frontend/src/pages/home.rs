use yew::prelude::*;
use yew_router::prelude::Link;
use crate::{Route, base::Base};
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <div class={styles::HERO_CONTAINER}>
                <div class={styles::HERO_CONTENT}>
                    <h1 class={styles::HERO_TITLE}>{"Spin to Win Studio"}</h1>
                    <p class={styles::HERO_SUBTITLE}>
                        {"Embed a promotional prize wheel on your landing pages, configure \
                          prizes and copy from one dashboard, and watch the plays roll in."}
                    </p>
                    <div class="flex justify-center gap-4">
                        <Link<Route> to={Route::Admin} classes={styles::BUTTON_PRIMARY}>
                            {"Open the dashboard"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <div class="max-w-4xl mx-auto px-4 pb-16 grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"Weighted prizes"}</h3>
                    <p class={classes!("mt-2", styles::CARD_TEXT)}>
                        {"Give every prize its own weight; the wheel keeps the odds honest \
                          no matter how many slices you add."}
                    </p>
                </div>
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"Your branding"}</h3>
                    <p class={classes!("mt-2", styles::CARD_TEXT)}>
                        {"Solid or gradient slice colors, your copy, your logo. Visitors \
                          never leave your page."}
                    </p>
                </div>
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"Simple analytics"}</h3>
                    <p class={classes!("mt-2", styles::CARD_TEXT)}>
                        {"Views, spins and redemptions per page, with a per-prize breakdown."}
                    </p>
                </div>
            </div>
        </Base>
    }
}
