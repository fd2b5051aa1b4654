use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_net::http::Request;
use shared::api::ApiEnvelope;
use shared::constants::{PAGE_UNAVAILABLE_ERROR, PUBLIC_PAGE_ENDPOINT};
use shared::page::PublicPage;
use crate::config::get_api_base_url;

#[derive(Clone, PartialEq)]
pub enum PageConfigState {
    Loading,
    Loaded(Rc<PublicPage>),
    Failed(String),
}

/// Fetch the public page configuration for `id`. Failure leaves the caller
/// with a generic message; the wheel never becomes interactive without a
/// well-formed prize list.
#[hook]
pub fn use_page_config(id: String) -> PageConfigState {
    let state = use_state(|| PageConfigState::Loading);

    {
        let state = state.clone();
        use_effect_with(id, move |id| {
            let id = id.clone();
            state.set(PageConfigState::Loading);
            spawn_local(async move {
                let url = format!("{}{}/{}", get_api_base_url(), PUBLIC_PAGE_ENDPOINT, id);
                let loaded = match Request::get(&url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<ApiEnvelope<PublicPage>>().await {
                            Ok(envelope) => envelope.into_result(),
                            Err(e) => Err(format!("Error parsing page response: {:?}", e)),
                        }
                    }
                    Ok(response) => Err(format!("Error status: {}", response.status())),
                    Err(e) => Err(format!("Network error: {:?}", e)),
                };

                match loaded {
                    Ok(page) => state.set(PageConfigState::Loaded(Rc::new(page))),
                    Err(err) => {
                        log::error!("failed to load page config: {}", err);
                        state.set(PageConfigState::Failed(PAGE_UNAVAILABLE_ERROR.to_string()));
                    }
                }
            });
            || ()
        });
    }

    (*state).clone()
}
