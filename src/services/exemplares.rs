//! Copy management service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::exemplar::{Exemplar, ExemplarPayload},
    repository::{ExemplarStore, LivroStore},
};

#[derive(Clone)]
pub struct ExemplaresService {
    exemplares: Arc<dyn ExemplarStore>,
    livros: Arc<dyn LivroStore>,
}

impl ExemplaresService {
    pub fn new(exemplares: Arc<dyn ExemplarStore>, livros: Arc<dyn LivroStore>) -> Self {
        Self { exemplares, livros }
    }

    pub async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Exemplar>, i64)> {
        self.exemplares.list(numero_pagina, quantidade).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Exemplar> {
        self.exemplares.get_by_id(id).await
    }

    /// Create a copy of an existing book
    pub async fn create(&self, payload: ExemplarPayload) -> AppResult<Exemplar> {
        self.livros.get_by_id(payload.livro_id).await?;
        self.exemplares.insert(&payload).await
    }

    pub async fn update(&self, id: i32, payload: ExemplarPayload) -> AppResult<Exemplar> {
        self.livros.get_by_id(payload.livro_id).await?;
        self.exemplares
            .save(&Exemplar {
                id,
                livro_id: payload.livro_id,
                disponivel: payload.disponivel,
            })
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.exemplares.delete(id).await
    }
}
