pub mod a001_entregador;
pub mod a002_adiantamento;
