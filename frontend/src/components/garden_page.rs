use shared::{can_activate, DEFAULT_MAX_ACTIVE};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{error_banner::ErrorBanner, journal_list::JournalList, plant_card::PlantCard};
use crate::hooks::use_garden::use_garden;
use crate::routes::Route;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct GardenPageProps {
    #[prop_or(DEFAULT_MAX_ACTIVE)]
    pub max_active: usize,
}

#[function_component(GardenPage)]
pub fn garden_page(props: &GardenPageProps) -> Html {
    let api_client = ApiClient::new();
    let garden = use_garden(&api_client, props.max_active);
    let state = &garden.state;

    let plants = if state.plants.is_empty() && !state.loading {
        html! { <p class="muted">{ "Nothing planted yet. Seeds come from journal entries." }</p> }
    } else {
        html! {
            <>
            { for state.plants.iter().map(|plant| html! {
                <PlantCard
                    key={plant.id.clone()}
                    plant={plant.clone()}
                    can_activate={can_activate(plant, &state.plants, props.max_active)}
                    max_active={props.max_active}
                    on_toggle={garden.actions.toggle_plant.clone()}
                />
            }) }
            </>
        }
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{ "Garden" }</h1>
                <Link<Route> to={Route::Journal} classes="primary">{ "Write" }</Link<Route>>
            </div>
            <ErrorBanner message={state.error.clone()} />
            if state.loading && state.plants.is_empty() {
                <p class="muted">{ "Loading..." }</p>
            }
            <section>
                <h2>{ "Plants" }</h2>
                { plants }
            </section>
            <section>
                <h2>{ "Recent entries" }</h2>
                <JournalList journals={state.journals.clone()} />
            </section>
        </div>
    }
}
