//! Books repository for database operations

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::livro::{Livro, LivroPayload},
};

/// Persistence port for books
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LivroStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> AppResult<Livro>;
    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Livro>, i64)>;
    async fn insert(&self, payload: &LivroPayload) -> AppResult<Livro>;
    async fn update(&self, id: i32, payload: &LivroPayload) -> AppResult<Livro>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct LivrosRepository {
    pool: Pool<Postgres>,
}

impl LivrosRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LivroStore for LivrosRepository {
    async fn get_by_id(&self, id: i32) -> AppResult<Livro> {
        sqlx::query_as::<_, Livro>("SELECT * FROM livros WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Livro com id {} não encontrado", id)))
    }

    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Livro>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM livros")
            .fetch_one(&self.pool)
            .await?;

        let livros = sqlx::query_as::<_, Livro>(
            "SELECT * FROM livros ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(quantidade)
        .bind(numero_pagina * quantidade)
        .fetch_all(&self.pool)
        .await?;

        Ok((livros, total))
    }

    async fn insert(&self, payload: &LivroPayload) -> AppResult<Livro> {
        let livro = sqlx::query_as::<_, Livro>(
            r#"
            INSERT INTO livros (titulo, autor, isbn)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&payload.titulo)
        .bind(&payload.autor)
        .bind(&payload.isbn)
        .fetch_one(&self.pool)
        .await?;

        Ok(livro)
    }

    async fn update(&self, id: i32, payload: &LivroPayload) -> AppResult<Livro> {
        sqlx::query_as::<_, Livro>(
            r#"
            UPDATE livros SET titulo = $1, autor = $2, isbn = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&payload.titulo)
        .bind(&payload.autor)
        .bind(&payload.isbn)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Livro com id {} não encontrado", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM livros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Livro com id {} não encontrado", id)));
        }
        Ok(())
    }
}
