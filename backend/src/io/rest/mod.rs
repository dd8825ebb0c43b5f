//! # REST API Interface Layer
//!
//! | method | path                | handler                 |
//! |--------|---------------------|-------------------------|
//! | GET    | `/api/plants`       | `list_plants`           |
//! | POST   | `/api/plants`       | `create_plant`          |
//! | PATCH  | `/api/plants/:id`   | `update_plant_state`    |
//! | GET    | `/api/journals`     | `list_journals`         |
//! | POST   | `/api/journals`     | `create_journal`        |
//! | GET    | `/api/journals/:id` | `get_journal`           |
//! | GET    | `/api/settings`     | `get_settings`          |
//! | POST   | `/api/logs`         | `log_message`           |

pub mod error;
pub mod journal_apis;
pub mod logging_apis;
pub mod mappers;
pub mod plant_apis;
pub mod settings_apis;

pub use journal_apis::*;
pub use logging_apis::*;
pub use plant_apis::*;
pub use settings_apis::*;

use serde::Deserialize;

/// Query parameters shared by the list endpoints
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub limit: Option<u32>,
}
