mod view;

pub use view::FormBancario;
