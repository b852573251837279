//! Copy endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::exemplar::{Exemplar, ExemplarPayload},
};

use super::{PageQuery, PaginatedResponse};

/// List copies with pagination
#[utoipa::path(
    get,
    path = "/exemplares",
    tag = "exemplares",
    params(
        ("numeroPagina" = Option<i64>, Query, description = "Page number (default: 0)"),
        ("quantidade" = Option<i64>, Query, description = "Items per page (default: 5)")
    ),
    responses(
        (status = 200, description = "Page of copies", body = PaginatedResponse<Exemplar>)
    )
)]
pub async fn list_exemplares(
    State(state): State<crate::AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Exemplar>>> {
    let (items, total) = state
        .services
        .exemplares
        .list(page.numero_pagina(), page.quantidade())
        .await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        numero_pagina: page.numero_pagina(),
        quantidade: page.quantidade(),
    }))
}

/// Get copy by ID
#[utoipa::path(
    get,
    path = "/exemplares/{id}",
    tag = "exemplares",
    params(
        ("id" = i32, Path, description = "Copy ID")
    ),
    responses(
        (status = 200, description = "Copy details", body = Exemplar),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn get_exemplar(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Exemplar>> {
    let exemplar = state.services.exemplares.get(id).await?;
    Ok(Json(exemplar))
}

/// Create a new copy of a book
#[utoipa::path(
    post,
    path = "/exemplares",
    tag = "exemplares",
    request_body = ExemplarPayload,
    responses(
        (status = 201, description = "Copy created", body = Exemplar),
        (status = 404, description = "Referenced book not found")
    )
)]
pub async fn create_exemplar(
    State(state): State<crate::AppState>,
    Json(payload): Json<ExemplarPayload>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Exemplar>)> {
    let exemplar = state.services.exemplares.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/exemplares/{}", exemplar.id))],
        Json(exemplar),
    ))
}

/// Update an existing copy
#[utoipa::path(
    put,
    path = "/exemplares/{id}",
    tag = "exemplares",
    params(
        ("id" = i32, Path, description = "Copy ID")
    ),
    request_body = ExemplarPayload,
    responses(
        (status = 200, description = "Copy updated", body = Exemplar),
        (status = 404, description = "Copy or referenced book not found")
    )
)]
pub async fn update_exemplar(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ExemplarPayload>,
) -> AppResult<Json<Exemplar>> {
    let exemplar = state.services.exemplares.update(id, payload).await?;
    Ok(Json(exemplar))
}

/// Delete a copy
#[utoipa::path(
    delete,
    path = "/exemplares/{id}",
    tag = "exemplares",
    params(
        ("id" = i32, Path, description = "Copy ID")
    ),
    responses(
        (status = 204, description = "Copy deleted"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn delete_exemplar(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.exemplares.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
