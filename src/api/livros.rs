//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::livro::{Livro, LivroPayload},
};

use super::{PageQuery, PaginatedResponse};

/// List books with pagination
#[utoipa::path(
    get,
    path = "/livros",
    tag = "livros",
    params(
        ("numeroPagina" = Option<i64>, Query, description = "Page number (default: 0)"),
        ("quantidade" = Option<i64>, Query, description = "Items per page (default: 5)")
    ),
    responses(
        (status = 200, description = "Page of books", body = PaginatedResponse<Livro>)
    )
)]
pub async fn list_livros(
    State(state): State<crate::AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Livro>>> {
    let (items, total) = state
        .services
        .livros
        .list(page.numero_pagina(), page.quantidade())
        .await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        numero_pagina: page.numero_pagina(),
        quantidade: page.quantidade(),
    }))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Livro),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Livro>> {
    let livro = state.services.livros.get(id).await?;
    Ok(Json(livro))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/livros",
    tag = "livros",
    request_body = LivroPayload,
    responses(
        (status = 201, description = "Book created", body = Livro)
    )
)]
pub async fn create_livro(
    State(state): State<crate::AppState>,
    Json(payload): Json<LivroPayload>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Livro>)> {
    let livro = state.services.livros.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/livros/{}", livro.id))],
        Json(livro),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = LivroPayload,
    responses(
        (status = 200, description = "Book updated", body = Livro),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LivroPayload>,
) -> AppResult<Json<Livro>> {
    let livro = state.services.livros.update(id, payload).await?;
    Ok(Json(livro))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.livros.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
