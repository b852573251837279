//! Repository layer for database operations

pub mod clientes;
pub mod emprestimos;
pub mod exemplares;
pub mod livros;

pub use clientes::ClienteStore;
pub use emprestimos::EmprestimoStore;
pub use exemplares::ExemplarStore;
pub use livros::LivroStore;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub livros: livros::LivrosRepository,
    pub clientes: clientes::ClientesRepository,
    pub exemplares: exemplares::ExemplaresRepository,
    pub emprestimos: emprestimos::EmprestimosRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            livros: livros::LivrosRepository::new(pool.clone()),
            clientes: clientes::ClientesRepository::new(pool.clone()),
            exemplares: exemplares::ExemplaresRepository::new(pool.clone()),
            emprestimos: emprestimos::EmprestimosRepository::new(pool.clone()),
            pool,
        }
    }
}
