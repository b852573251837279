//! API handlers for the Biblioteca REST endpoints

pub mod clientes;
pub mod emprestimos;
pub mod exemplares;
pub mod health;
pub mod livros;
pub mod openapi;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination query parameters shared by every list endpoint
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "numeroPagina")]
    pub numero_pagina: Option<i64>,
    pub quantidade: Option<i64>,
}

impl PageQuery {
    /// Page number, zero-based
    pub fn numero_pagina(&self) -> i64 {
        self.numero_pagina.unwrap_or(0).max(0)
    }

    /// Page size
    pub fn quantidade(&self) -> i64 {
        self.quantidade.unwrap_or(5).max(1)
    }
}

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Items on the current page
    pub items: Vec<T>,
    /// Total number of records
    pub total: i64,
    /// Current page number
    #[serde(rename = "numeroPagina")]
    pub numero_pagina: i64,
    /// Items per page
    pub quantidade: i64,
}
