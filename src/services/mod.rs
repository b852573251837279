//! Business logic services

pub mod clientes;
pub mod emprestimos;
pub mod exemplares;
pub mod livros;

use std::sync::Arc;

use crate::repository::{ClienteStore, EmprestimoStore, ExemplarStore, LivroStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub livros: livros::LivrosService,
    pub clientes: clientes::ClientesService,
    pub exemplares: exemplares::ExemplaresService,
    pub emprestimos: emprestimos::EmprestimosService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let livros: Arc<dyn LivroStore> = Arc::new(repository.livros.clone());
        let clientes: Arc<dyn ClienteStore> = Arc::new(repository.clientes.clone());
        let exemplares: Arc<dyn ExemplarStore> = Arc::new(repository.exemplares.clone());
        let emprestimos: Arc<dyn EmprestimoStore> = Arc::new(repository.emprestimos.clone());

        Self {
            livros: livros::LivrosService::new(livros.clone()),
            clientes: clientes::ClientesService::new(clientes.clone()),
            exemplares: exemplares::ExemplaresService::new(exemplares.clone(), livros),
            emprestimos: emprestimos::EmprestimosService::new(emprestimos, exemplares, clientes),
        }
    }
}
