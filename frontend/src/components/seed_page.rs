use shared::{derive_seed_label, SeedDecision, SeedQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::hooks::use_request_epoch::use_request_epoch;
use crate::routes::Route;
use crate::services::{api::ApiClient, logging::Logger};

/// The plant form is shown, and accepts a submit, only once the entry has
/// loaded and no insert is in flight
fn accepts_plant(is_loading: bool, is_saving: bool) -> bool {
    !is_loading && !is_saving
}

#[function_component(SeedPage)]
pub fn seed_page() -> Html {
    let journal_id = use_location()
        .and_then(|location| location.query::<SeedQuery>().ok())
        .and_then(|query| query.journal_id().map(str::to_string));

    let journal_content = use_state(|| Option::<String>::None);
    let label = use_state(String::new);
    let is_loading = use_state(|| journal_id.is_some());
    let is_saving = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let load_epoch = use_request_epoch();
    let submit_epoch = use_request_epoch();
    let navigator = use_navigator();
    let api_client = ApiClient::new();

    // Load the source entry and suggest a label from its first line
    use_effect_with(journal_id.clone(), {
        let api_client = api_client.clone();
        let journal_content = journal_content.clone();
        let label = label.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let epoch = load_epoch.clone();

        move |journal_id: &Option<String>| {
            if let Some(journal_id) = journal_id.clone() {
                let token = epoch.begin();
                is_loading.set(true);

                spawn_local(async move {
                    let result = api_client.get_journal(&journal_id).await;
                    if !epoch.is_current(token) {
                        return;
                    }

                    match result {
                        Ok(entry) => {
                            label.set(derive_seed_label(&entry.content));
                            journal_content.set(Some(entry.content));
                        }
                        Err(e) => {
                            Logger::warn_with_component("seed", &e.message);
                            error_message.set(Some(e.message));
                        }
                    }
                    is_loading.set(false);
                });
            }
            || ()
        }
    });

    let go_to_garden = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Garden);
            }
        })
    };

    let on_label_input = {
        let label = label.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            label.set(input.value());
        })
    };

    let on_plant = {
        let label = label.clone();
        let is_loading = is_loading.clone();
        let is_saving = is_saving.clone();
        let error_message = error_message.clone();
        let epoch = submit_epoch.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: MouseEvent| {
            if !accepts_plant(*is_loading, *is_saving) {
                return;
            }

            let label = match SeedDecision::from_label(&label) {
                SeedDecision::Plant(label) => label,
                SeedDecision::Skip => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Garden);
                    }
                    return;
                }
            };

            let api_client = api_client.clone();
            let is_saving = is_saving.clone();
            let error_message = error_message.clone();
            let epoch = epoch.clone();
            let navigator = navigator.clone();
            let token = epoch.begin();

            is_saving.set(true);
            error_message.set(None);

            spawn_local(async move {
                let result = api_client.create_plant(label).await;
                if !epoch.is_current(token) {
                    return;
                }

                match result {
                    Ok(plant) => {
                        Logger::info_with_component("seed", &format!("Planted seed {}", plant.id));
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Garden);
                        }
                    }
                    Err(e) => {
                        Logger::warn_with_component("seed", &e.message);
                        error_message.set(Some(e.message));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{ "Plant a seed?" }</h1>
                <button class="secondary" onclick={go_to_garden.clone()}>{ "Skip" }</button>
            </div>
            <ErrorBanner message={(*error_message).clone()} />
            if *is_loading {
                <p class="muted">{ "Loading entry..." }</p>
            }
            if let Some(content) = &*journal_content {
                <div class="card entry">{ content.clone() }</div>
            }
            if !*is_loading {
                <>
                <input
                    type="text"
                    value={(*label).clone()}
                    oninput={on_label_input}
                    placeholder="Name this seed"
                    disabled={*is_saving}
                />
                <div class="actions">
                    <button class="primary" onclick={on_plant} disabled={!accepts_plant(*is_loading, *is_saving)}>
                        { if *is_saving { "Planting..." } else { "Plant seed" } }
                    </button>
                    <button class="secondary" onclick={go_to_garden} disabled={*is_saving}>{ "Not today" }</button>
                </div>
                </>
            }
        </div>
    }
}
