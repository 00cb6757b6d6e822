use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::{SupabaseConfig, SupabaseRestClient};

pub mod application;
pub mod domain;
pub mod format_utils;
pub mod infrastructure;
pub mod time_utils;

/// Initialize the console core: panic hook, logger, browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "workshop console core initialized",
    );
}

/// Connectivity probe for the host page: fetches the craftsman list and
/// reports the outcome on the console.
#[wasm_bindgen]
pub async fn check_record_store(base_url: String, anon_key: String) -> Result<(), JsValue> {
    use crate::domain::workshop::repositories::RecordStore;

    let client = SupabaseRestClient::new(SupabaseConfig::new(&base_url, &anon_key));
    match client.fetch_craftsmen().await {
        Ok(craftsmen) => {
            get_logger().info(
                LogComponent::Infrastructure("Probe"),
                &format!("record store reachable, {} craftsmen registered", craftsmen.len()),
            );
            Ok(())
        }
        Err(e) => {
            get_logger().error(
                LogComponent::Infrastructure("Probe"),
                &format!("record store unreachable: {}", e),
            );
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
