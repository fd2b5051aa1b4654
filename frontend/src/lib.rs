pub mod base;
pub mod styles;
pub mod hooks;
pub mod models;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    admin::Admin,
    home::Home,
    not_found::NotFound,
    public_page::PublicPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/p/:id")] PublicPage { id: String },
    #[at("/admin")] Admin,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::PublicPage { id } => html! { <PublicPage {id} /> },
        Route::Admin => html! { <Admin /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
