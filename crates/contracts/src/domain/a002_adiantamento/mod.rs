pub mod aggregate;
pub mod filter;

pub use aggregate::{CpfStatus, SolicitacaoAdiantamento};
pub use filter::{available_days, AdiantamentoFilter};
