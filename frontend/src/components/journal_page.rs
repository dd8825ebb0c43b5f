use shared::{validate_journal_content, SeedQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::hooks::use_request_epoch::use_request_epoch;
use crate::routes::Route;
use crate::services::{api::ApiClient, logging::Logger};

#[function_component(JournalPage)]
pub fn journal_page() -> Html {
    let content = use_state(String::new);
    let is_saving = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let epoch = use_request_epoch();
    let navigator = use_navigator();
    let api_client = ApiClient::new();

    let on_input = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(textarea.value());
        })
    };

    let on_save = {
        let content = content.clone();
        let is_saving = is_saving.clone();
        let error_message = error_message.clone();
        let epoch = epoch.clone();
        let navigator = navigator.clone();

        Callback::from(move |_: MouseEvent| {
            let draft = match validate_journal_content(&content) {
                Ok(draft) => draft,
                Err(e) => {
                    error_message.set(Some(e.to_string()));
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
                let result = api_client.create_journal(draft).await;
                if !epoch.is_current(token) {
                    return;
                }

                match result {
                    Ok(entry) => {
                        Logger::info_with_component("journal", &format!("Saved journal entry {}", entry.id));
                        if let Some(navigator) = navigator {
                            if let Err(e) = navigator.push_with_query(&Route::Seed, &SeedQuery::for_journal(entry.id)) {
                                Logger::error_with_component("journal", &format!("Navigation failed: {}", e));
                            }
                        }
                    }
                    Err(e) => {
                        // The draft stays in the textarea
                        Logger::warn_with_component("journal", &e.message);
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
                <h1>{ "Journal" }</h1>
                <Link<Route> to={Route::Garden} classes="secondary">{ "Back to garden" }</Link<Route>>
            </div>
            <textarea
                value={(*content).clone()}
                oninput={on_input}
                placeholder="What's on your mind?"
                disabled={*is_saving}
            />
            <ErrorBanner message={(*error_message).clone()} />
            <div class="actions">
                <button class="primary" onclick={on_save} disabled={*is_saving}>
                    { if *is_saving { "Saving..." } else { "Save" } }
                </button>
            </div>
        </div>
    }
}
