//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing backend URLs and for browser navigation.

/// Join the configured base URL and a path
///
/// An empty base keeps the path relative, so requests go to the page's own origin.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
///
/// assert_eq!(join_url("", "/entregadores"), "/entregadores");
/// assert_eq!(join_url("https://adm.example.com/", "/x"), "https://adm.example.com/x");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// URL of the details JSON of a delivery worker
pub fn entregador_details_url(base: &str, id: &str) -> String {
    join_url(base, &format!("/entregador/{}/detalhes-json", urlencoding::encode(id)))
}

/// URL of the AJAX edit endpoint
pub fn entregador_edit_url(base: &str, id: &str) -> String {
    join_url(base, &format!("/entregador/{}/editar", urlencoding::encode(id)))
}

/// URL of the server-side delete action
pub fn entregador_delete_url(base: &str, id: &str) -> String {
    join_url(base, &format!("/entregador/excluir/{}", urlencoding::encode(id)))
}

/// Current viewport width, if available
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Full page navigation
pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}

/// Browser confirm dialog; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
