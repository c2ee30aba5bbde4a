//! Server-embedded page data
//!
//! Pages rendered by the backend carry their rows as JSON inside
//! `<script type="application/json" id="...">` blocks.

use serde::de::DeserializeOwned;

/// Parse an embedded JSON block. A missing or blank block yields `Ok(None)`.
pub fn parse_page_data<T: DeserializeOwned>(text: Option<&str>) -> Result<Option<T>, String> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(json) => serde_json::from_str(json).map(Some).map_err(|e| e.to_string()),
    }
}

/// Read the JSON block with the given element id from the current document
pub fn read_json_script<T: DeserializeOwned>(id: &str) -> Result<Option<T>, String> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.text_content());
    parse_page_data(text.as_deref())
}

/// Rows for a list page; errors are logged and produce an empty list
pub fn read_rows<T: DeserializeOwned>(id: &str) -> Vec<T> {
    match read_json_script::<Vec<T>>(id) {
        Ok(rows) => rows.unwrap_or_default(),
        Err(e) => {
            log::error!("Failed to read #{}: {}", id, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_block() {
        assert_eq!(parse_page_data::<Vec<i32>>(None), Ok(None));
        assert_eq!(parse_page_data::<Vec<i32>>(Some("  \n ")), Ok(None));
    }

    #[test]
    fn test_valid_and_invalid_json() {
        assert_eq!(parse_page_data::<Vec<i32>>(Some("[1, 2]")), Ok(Some(vec![1, 2])));
        assert!(parse_page_data::<Vec<i32>>(Some("[1,")).is_err());
    }
}
