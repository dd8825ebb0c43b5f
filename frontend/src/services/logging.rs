use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::api_base_url;

fn log_endpoint(base_url: &str) -> String {
    format!("{}/api/logs", base_url)
}

/// Writes to the browser console and forwards the line to the backend
pub struct Logger;

impl Logger {
    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
        Self::log("info", message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, component);
    }

    fn log(level: &str, message: &str, component: &str) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component: Some(component.to_string()),
        };

        // Fire and forget; a failed log post is not worth surfacing
        spawn_local(async move {
            if let Ok(request) = Request::post(&log_endpoint(api_base_url())).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_go_to_the_api_backend() {
        assert_eq!(log_endpoint("http://garden.local"), "http://garden.local/api/logs");
        assert!(log_endpoint(api_base_url()).starts_with(api_base_url()));
    }
}
