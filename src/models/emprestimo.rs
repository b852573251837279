//! Loan (emprestimo) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::cliente::Cliente;
use super::exemplar::Exemplar;

/// Loan row from database. References exemplar and cliente by id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Emprestimo {
    pub id: i32,
    pub exemplar_id: i32,
    pub cliente_id: i32,
    pub data: NaiveDate,
}

/// Loan with resolved exemplar and cliente for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmprestimoDetails {
    pub id: i32,
    pub exemplar: Exemplar,
    pub cliente: Cliente,
    pub data: NaiveDate,
}

/// Create loan data, after request deserialization
#[derive(Debug, Clone, PartialEq)]
pub struct NovoEmprestimo {
    pub exemplar_id: i32,
    pub cliente_id: i32,
    pub data: NaiveDate,
}
