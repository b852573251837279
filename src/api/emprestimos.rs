//! Loan endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::emprestimo::{EmprestimoDetails, NovoEmprestimo},
};

use super::{PageQuery, PaginatedResponse};

/// Create/update loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmprestimoRequest {
    /// Copy ID
    #[serde(rename = "idExemplar")]
    pub id_exemplar: i32,
    /// Client ID
    #[serde(rename = "idCliente")]
    pub id_cliente: i32,
    /// Loan date
    pub data: NaiveDate,
}

impl From<EmprestimoRequest> for NovoEmprestimo {
    fn from(request: EmprestimoRequest) -> Self {
        Self {
            exemplar_id: request.id_exemplar,
            cliente_id: request.id_cliente,
            data: request.data,
        }
    }
}

/// List loans with pagination
#[utoipa::path(
    get,
    path = "/emprestimos",
    tag = "emprestimos",
    params(
        ("numeroPagina" = Option<i64>, Query, description = "Page number (default: 0)"),
        ("quantidade" = Option<i64>, Query, description = "Items per page (default: 5)")
    ),
    responses(
        (status = 200, description = "Page of loans", body = PaginatedResponse<EmprestimoDetails>)
    )
)]
pub async fn list_emprestimos(
    State(state): State<crate::AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<EmprestimoDetails>>> {
    let (items, total) = state
        .services
        .emprestimos
        .list(page.numero_pagina(), page.quantidade())
        .await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        numero_pagina: page.numero_pagina(),
        quantidade: page.quantidade(),
    }))
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/emprestimos/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = EmprestimoDetails),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_emprestimo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EmprestimoDetails>> {
    let emprestimo = state.services.emprestimos.get(id).await?;
    Ok(Json(emprestimo))
}

/// Create a new loan
#[utoipa::path(
    post,
    path = "/emprestimos",
    tag = "emprestimos",
    request_body = EmprestimoRequest,
    responses(
        (status = 201, description = "Loan created", body = EmprestimoDetails),
        (status = 404, description = "Copy or client not found"),
        (status = 409, description = "Copy unavailable (code 1001) or client not eligible (code 1002)")
    )
)]
pub async fn create_emprestimo(
    State(state): State<crate::AppState>,
    Json(request): Json<EmprestimoRequest>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<EmprestimoDetails>)> {
    let emprestimo = state.services.emprestimos.create(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/emprestimos/{}", emprestimo.id))],
        Json(emprestimo),
    ))
}

/// Update an existing loan
#[utoipa::path(
    put,
    path = "/emprestimos/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    request_body = EmprestimoRequest,
    responses(
        (status = 200, description = "Loan updated", body = EmprestimoDetails),
        (status = 404, description = "Loan, copy, or client not found")
    )
)]
pub async fn update_emprestimo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<EmprestimoRequest>,
) -> AppResult<Json<EmprestimoDetails>> {
    let emprestimo = state.services.emprestimos.update(id, request.into()).await?;
    Ok(Json(emprestimo))
}

/// Delete a loan, releasing its copy
#[utoipa::path(
    delete,
    path = "/emprestimos/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 204, description = "Loan deleted"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_emprestimo(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.emprestimos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
