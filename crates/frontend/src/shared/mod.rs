pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod modal_frame;
pub mod page_data;
pub mod toast;
