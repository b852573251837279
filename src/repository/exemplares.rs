//! Copies repository for database operations

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::exemplar::{Exemplar, ExemplarPayload},
};

/// Persistence port for physical copies
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExemplarStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> AppResult<Exemplar>;
    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Exemplar>, i64)>;
    async fn insert(&self, payload: &ExemplarPayload) -> AppResult<Exemplar>;
    /// Write back a whole copy by identity (used by the loan workflow to
    /// flip `disponivel`)
    async fn save(&self, exemplar: &Exemplar) -> AppResult<Exemplar>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct ExemplaresRepository {
    pool: Pool<Postgres>,
}

impl ExemplaresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExemplarStore for ExemplaresRepository {
    async fn get_by_id(&self, id: i32) -> AppResult<Exemplar> {
        sqlx::query_as::<_, Exemplar>("SELECT * FROM exemplares WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Exemplar com id {} não encontrado", id)))
    }

    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Exemplar>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exemplares")
            .fetch_one(&self.pool)
            .await?;

        let exemplares = sqlx::query_as::<_, Exemplar>(
            "SELECT * FROM exemplares ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(quantidade)
        .bind(numero_pagina * quantidade)
        .fetch_all(&self.pool)
        .await?;

        Ok((exemplares, total))
    }

    async fn insert(&self, payload: &ExemplarPayload) -> AppResult<Exemplar> {
        let exemplar = sqlx::query_as::<_, Exemplar>(
            r#"
            INSERT INTO exemplares (livro_id, disponivel)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(payload.livro_id)
        .bind(payload.disponivel)
        .fetch_one(&self.pool)
        .await?;

        Ok(exemplar)
    }

    async fn save(&self, exemplar: &Exemplar) -> AppResult<Exemplar> {
        sqlx::query_as::<_, Exemplar>(
            r#"
            UPDATE exemplares SET livro_id = $1, disponivel = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(exemplar.livro_id)
        .bind(exemplar.disponivel)
        .bind(exemplar.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Exemplar com id {} não encontrado", exemplar.id))
        })
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exemplares WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Exemplar com id {} não encontrado", id)));
        }
        Ok(())
    }
}
