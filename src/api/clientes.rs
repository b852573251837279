//! Client endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::cliente::{Cliente, ClientePayload},
};

use super::{PageQuery, PaginatedResponse};

/// List clients with pagination
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "clientes",
    params(
        ("numeroPagina" = Option<i64>, Query, description = "Page number (default: 0)"),
        ("quantidade" = Option<i64>, Query, description = "Items per page (default: 5)")
    ),
    responses(
        (status = 200, description = "Page of clients", body = PaginatedResponse<Cliente>)
    )
)]
pub async fn list_clientes(
    State(state): State<crate::AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Cliente>>> {
    let (items, total) = state
        .services
        .clientes
        .list(page.numero_pagina(), page.quantidade())
        .await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        numero_pagina: page.numero_pagina(),
        quantidade: page.quantidade(),
    }))
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/clientes/{id}",
    tag = "clientes",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client details", body = Cliente),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_cliente(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Cliente>> {
    let cliente = state.services.clientes.get(id).await?;
    Ok(Json(cliente))
}

/// Create a new client
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "clientes",
    request_body = ClientePayload,
    responses(
        (status = 201, description = "Client created", body = Cliente)
    )
)]
pub async fn create_cliente(
    State(state): State<crate::AppState>,
    Json(payload): Json<ClientePayload>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Cliente>)> {
    let cliente = state.services.clientes.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/clientes/{}", cliente.id))],
        Json(cliente),
    ))
}

/// Update an existing client
#[utoipa::path(
    put,
    path = "/clientes/{id}",
    tag = "clientes",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Client updated", body = Cliente),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_cliente(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ClientePayload>,
) -> AppResult<Json<Cliente>> {
    let cliente = state.services.clientes.update(id, payload).await?;
    Ok(Json(cliente))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    tag = "clientes",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_cliente(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.clientes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
