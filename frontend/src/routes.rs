use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{garden_page::GardenPage, journal_page::JournalPage, seed_page::SeedPage};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/garden")]
    Garden,
    #[at("/journal")]
    Journal,
    /// Takes an optional `journalId` query parameter
    #[at("/seed")]
    Seed,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Unknown paths land on the garden
pub fn switch(route: Route, max_active: usize) -> Html {
    match route {
        Route::Home | Route::Garden | Route::NotFound => html! { <GardenPage {max_active} /> },
        Route::Journal => html! { <JournalPage /> },
        Route::Seed => html! { <SeedPage /> },
    }
}
