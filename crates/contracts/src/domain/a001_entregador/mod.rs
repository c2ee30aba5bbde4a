pub mod aggregate;
pub mod filter;

pub use aggregate::{Entregador, EntregadorDto, EntregadorStatus, DEFAULT_EMISSOR};
pub use filter::EntregadorFilter;
