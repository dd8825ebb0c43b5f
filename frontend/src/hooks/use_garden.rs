use futures::future::join;
use shared::{next_state, JournalEntry, Plant, RECENT_JOURNAL_LIMIT};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_request_epoch::use_request_epoch;
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct GardenState {
    pub plants: Vec<Plant>,
    pub journals: Vec<JournalEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseGardenResult {
    pub state: GardenState,
    pub actions: UseGardenActions,
}

#[derive(Clone, PartialEq)]
pub struct UseGardenActions {
    pub refresh: Callback<()>,
    /// Toggle the plant with this ID between resting and active
    pub toggle_plant: Callback<String>,
}

/// What a garden load puts on screen. Each fetch is applied on its own; the
/// banner shows the earliest failure.
#[derive(Debug, Clone, PartialEq)]
pub struct GardenLoad {
    pub plants: Vec<Plant>,
    pub journals: Vec<JournalEntry>,
    pub error: Option<String>,
}

impl GardenLoad {
    /// `pending_error` is a failure from the action that triggered the load
    pub fn from_results(
        plants: Result<Vec<Plant>, ApiError>,
        journals: Result<Vec<JournalEntry>, ApiError>,
        pending_error: Option<String>,
    ) -> Self {
        let mut error = pending_error;
        let plants = plants.unwrap_or_else(|e| {
            error.get_or_insert(e.message);
            Vec::new()
        });
        let journals = journals.unwrap_or_else(|e| {
            error.get_or_insert(e.message);
            Vec::new()
        });

        Self {
            plants,
            journals,
            error,
        }
    }
}

#[hook]
pub fn use_garden(api_client: &ApiClient, max_active: usize) -> UseGardenResult {
    let plants = use_state(Vec::<Plant>::new);
    let journals = use_state(Vec::<JournalEntry>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let epoch = use_request_epoch();

    // Fetch plants and recent journals together, keeping an optional error to show afterwards
    let load = {
        let api_client = api_client.clone();
        let plants = plants.clone();
        let journals = journals.clone();
        let loading = loading.clone();
        let error = error.clone();
        let epoch = epoch.clone();

        use_callback((), move |pending_error: Option<String>, _| {
            let api_client = api_client.clone();
            let plants = plants.clone();
            let journals = journals.clone();
            let loading = loading.clone();
            let error = error.clone();
            let epoch = epoch.clone();
            if epoch.is_closed() {
                return;
            }
            let token = epoch.begin();

            loading.set(true);

            spawn_local(async move {
                let (plants_result, journals_result) = join(
                    api_client.list_plants(),
                    api_client.list_journals(RECENT_JOURNAL_LIMIT),
                )
                .await;

                if !epoch.is_current(token) {
                    return;
                }

                let outcome = GardenLoad::from_results(plants_result, journals_result, pending_error);
                if let Some(message) = &outcome.error {
                    Logger::warn_with_component("garden", message);
                }
                plants.set(outcome.plants);
                journals.set(outcome.journals);
                error.set(outcome.error);
                loading.set(false);
            });
        })
    };

    let refresh = {
        let load = load.clone();
        use_callback((), move |_, _| load.emit(None))
    };

    let toggle_plant = {
        let api_client = api_client.clone();
        let load = load.clone();
        let epoch = epoch.clone();

        use_callback(
            ((*plants).clone(), max_active),
            move |plant_id: String, (current, max_active): &(Vec<Plant>, usize)| {
                let Some(plant) = current.iter().find(|p| p.id == plant_id) else {
                    return;
                };
                // No room to activate: the button is disabled and nothing is sent
                let Some(next) = next_state(plant, current, *max_active) else {
                    return;
                };

                let api_client = api_client.clone();
                let load = load.clone();
                let epoch = epoch.clone();
                spawn_local(async move {
                    let pending_error = match api_client.update_plant_state(&plant_id, next).await {
                        Ok(_) => None,
                        Err(e) => Some(e.message),
                    };
                    // The garden may have unmounted while the write was in flight
                    if epoch.is_closed() {
                        return;
                    }
                    load.emit(pending_error);
                });
            },
        )
    };

    // Load on mount
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = GardenState {
        plants: (*plants).clone(),
        journals: (*journals).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseGardenActions {
        refresh,
        toggle_plant,
    };

    UseGardenResult { state, actions }
}
