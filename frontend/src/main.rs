use shared::GardenSettings;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod routes;
mod services;

use routes::{switch, Route};
use services::{api::ApiClient, logging::Logger};

#[function_component(App)]
fn app() -> Html {
    // Until the backend answers, the client uses the default cap
    let settings = use_state(GardenSettings::default);

    use_effect_with((), {
        let settings = settings.clone();
        move |_| {
            spawn_local(async move {
                match ApiClient::new().get_settings().await {
                    Ok(loaded) => settings.set(loaded),
                    Err(e) => Logger::warn_with_component("app", &format!("Using default settings: {}", e)),
                }
            });
            || ()
        }
    });

    let max_active = settings.max_active_plants;

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| switch(route, max_active)} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
