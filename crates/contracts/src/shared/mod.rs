pub mod api;
pub mod pix_key;
pub mod pracas;
pub mod text;
