pub mod error_banner;
pub mod garden_page;
pub mod journal_list;
pub mod journal_page;
pub mod plant_card;
pub mod seed_page;
