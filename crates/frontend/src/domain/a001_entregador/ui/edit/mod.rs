mod view;
mod view_model;

pub use view::{EditModalHost, EntregadorEditForm};
pub use view_model::EntregadorEditViewModel;
