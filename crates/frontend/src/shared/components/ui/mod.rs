pub mod badge;
pub mod select;

pub use badge::{Badge, PixKeyBadge, StatusBadge};
pub use select::Select;
