use yew::prelude::*;
use yew_router::prelude::Link;
use crate::{Route, base::Base};
use crate::styles;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <div class={styles::FLEX_CENTER}>
                <div class="text-center">
                    <h1 class={styles::TEXT_H1}>{"Page not found"}</h1>
                    <p class={classes!("mt-4", styles::TEXT_BODY)}>
                        {"The promotion you were looking for may have ended."}
                    </p>
                    <div class="mt-8">
                        <Link<Route> to={Route::Home} classes={styles::BUTTON_PRIMARY}>
                            {"Back to start"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </Base>
    }
}
