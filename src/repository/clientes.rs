//! Clients repository for database operations

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::cliente::{Cliente, ClientePayload},
};

/// Persistence port for clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClienteStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> AppResult<Cliente>;
    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Cliente>, i64)>;
    async fn insert(&self, payload: &ClientePayload) -> AppResult<Cliente>;
    async fn update(&self, id: i32, payload: &ClientePayload) -> AppResult<Cliente>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct ClientesRepository {
    pool: Pool<Postgres>,
}

impl ClientesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteStore for ClientesRepository {
    async fn get_by_id(&self, id: i32) -> AppResult<Cliente> {
        sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cliente com id {} não encontrado", id)))
    }

    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Cliente>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(quantidade)
        .bind(numero_pagina * quantidade)
        .fetch_all(&self.pool)
        .await?;

        Ok((clientes, total))
    }

    async fn insert(&self, payload: &ClientePayload) -> AppResult<Cliente> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nome, apto)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&payload.nome)
        .bind(payload.apto)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    async fn update(&self, id: i32, payload: &ClientePayload) -> AppResult<Cliente> {
        sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes SET nome = $1, apto = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&payload.nome)
        .bind(payload.apto)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cliente com id {} não encontrado", id)))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Cliente com id {} não encontrado", id)));
        }
        Ok(())
    }
}
