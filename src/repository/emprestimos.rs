//! Loans repository for database operations

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::emprestimo::{Emprestimo, NovoEmprestimo},
};

/// Persistence port for loans
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmprestimoStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> AppResult<Emprestimo>;
    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Emprestimo>, i64)>;
    async fn insert(&self, novo: &NovoEmprestimo) -> AppResult<Emprestimo>;
    async fn save(&self, emprestimo: &Emprestimo) -> AppResult<Emprestimo>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct EmprestimosRepository {
    pool: Pool<Postgres>,
}

impl EmprestimosRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmprestimoStore for EmprestimosRepository {
    async fn get_by_id(&self, id: i32) -> AppResult<Emprestimo> {
        sqlx::query_as::<_, Emprestimo>("SELECT * FROM emprestimos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Empréstimo com id {} não encontrado", id)))
    }

    async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Emprestimo>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM emprestimos")
            .fetch_one(&self.pool)
            .await?;

        let emprestimos = sqlx::query_as::<_, Emprestimo>(
            "SELECT * FROM emprestimos ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(quantidade)
        .bind(numero_pagina * quantidade)
        .fetch_all(&self.pool)
        .await?;

        Ok((emprestimos, total))
    }

    async fn insert(&self, novo: &NovoEmprestimo) -> AppResult<Emprestimo> {
        let emprestimo = sqlx::query_as::<_, Emprestimo>(
            r#"
            INSERT INTO emprestimos (exemplar_id, cliente_id, data)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(novo.exemplar_id)
        .bind(novo.cliente_id)
        .bind(novo.data)
        .fetch_one(&self.pool)
        .await?;

        Ok(emprestimo)
    }

    async fn save(&self, emprestimo: &Emprestimo) -> AppResult<Emprestimo> {
        sqlx::query_as::<_, Emprestimo>(
            r#"
            UPDATE emprestimos SET exemplar_id = $1, cliente_id = $2, data = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(emprestimo.exemplar_id)
        .bind(emprestimo.cliente_id)
        .bind(emprestimo.data)
        .bind(emprestimo.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Empréstimo com id {} não encontrado", emprestimo.id))
        })
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM emprestimos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Empréstimo com id {} não encontrado", id)));
        }
        Ok(())
    }
}
