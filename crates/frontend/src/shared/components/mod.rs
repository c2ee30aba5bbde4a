pub mod aside_panel;
pub mod filter_bar;
pub mod page_header;
pub mod pix_key_input;
pub mod praca_select;
pub mod ui;
