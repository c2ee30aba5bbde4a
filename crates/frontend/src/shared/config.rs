//! Application configuration
//!
//! Defaults are embedded in the binary. The server page may override any of them with a
//! JSON block: `<script id="app-config" type="application/json">{...}</script>`.

use crate::shared::page_data::read_json_script;
use serde::Deserialize;

const CONFIG_SCRIPT_ID: &str = "app-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the backend. Empty means same origin.
    pub api_base: String,
    /// Viewport width (px) at or below which details open as a full page
    pub mobile_breakpoint_px: f64,
    pub toast_ms: u32,
    pub modal_fade_ms: u32,
    /// Delay before reloading the page after a successful save
    pub reload_delay_ms: u32,
    /// Operational users see details but cannot edit
    pub can_edit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            mobile_breakpoint_px: 768.0,
            toast_ms: 1800,
            modal_fade_ms: 250,
            reload_delay_ms: 800,
            can_edit: true,
        }
    }
}

impl AppConfig {
    /// Load config from the page, falling back to defaults
    pub fn load() -> Self {
        match read_json_script::<AppConfig>(CONFIG_SCRIPT_ID) {
            Ok(Some(config)) => {
                log::info!("Loaded config from #{}", CONFIG_SCRIPT_ID);
                config
            }
            Ok(None) => {
                log::info!("Using default embedded configuration");
                Self::default()
            }
            Err(e) => {
                log::warn!("Invalid #{} block, using defaults: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }
        }
    }

    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint_px
    }
}
