//! Entregador Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: ViewModel with load state
//! - view.rs: details content used inside the aside panel
//! - page.rs: full-page variant for narrow screens

pub mod model;
mod page;
mod view;
mod view_model;

pub use page::EntregadorDetailsPage;
pub use view::EntregadorDetails;
pub use view_model::{DetailsState, EntregadorDetailsViewModel};
