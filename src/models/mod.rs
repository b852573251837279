//! Data models for Biblioteca

pub mod cliente;
pub mod emprestimo;
pub mod exemplar;
pub mod livro;

// Re-export commonly used types
pub use cliente::Cliente;
pub use emprestimo::{Emprestimo, EmprestimoDetails, NovoEmprestimo};
pub use exemplar::Exemplar;
pub use livro::Livro;
