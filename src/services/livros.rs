//! Book catalog service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::livro::{Livro, LivroPayload},
    repository::LivroStore,
};

#[derive(Clone)]
pub struct LivrosService {
    livros: Arc<dyn LivroStore>,
}

impl LivrosService {
    pub fn new(livros: Arc<dyn LivroStore>) -> Self {
        Self { livros }
    }

    pub async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Livro>, i64)> {
        self.livros.list(numero_pagina, quantidade).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Livro> {
        self.livros.get_by_id(id).await
    }

    pub async fn create(&self, payload: LivroPayload) -> AppResult<Livro> {
        let livro = self.livros.insert(&payload).await?;
        tracing::info!("Livro criado: id={} titulo={:?}", livro.id, livro.titulo);
        Ok(livro)
    }

    pub async fn update(&self, id: i32, payload: LivroPayload) -> AppResult<Livro> {
        self.livros.update(id, &payload).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.livros.delete(id).await
    }
}
