//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{clientes, emprestimos, exemplares, health, livros};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.1.0",
        description = "Library Loan Management REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Livros
        livros::list_livros,
        livros::get_livro,
        livros::create_livro,
        livros::update_livro,
        livros::delete_livro,
        // Clientes
        clientes::list_clientes,
        clientes::get_cliente,
        clientes::create_cliente,
        clientes::update_cliente,
        clientes::delete_cliente,
        // Exemplares
        exemplares::list_exemplares,
        exemplares::get_exemplar,
        exemplares::create_exemplar,
        exemplares::update_exemplar,
        exemplares::delete_exemplar,
        // Emprestimos
        emprestimos::list_emprestimos,
        emprestimos::get_emprestimo,
        emprestimos::create_emprestimo,
        emprestimos::update_emprestimo,
        emprestimos::delete_emprestimo,
    ),
    components(
        schemas(
            crate::models::livro::Livro,
            crate::models::livro::LivroPayload,
            crate::models::cliente::Cliente,
            crate::models::cliente::ClientePayload,
            crate::models::exemplar::Exemplar,
            crate::models::exemplar::ExemplarPayload,
            crate::models::emprestimo::EmprestimoDetails,
            emprestimos::EmprestimoRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "livros", description = "Book management"),
        (name = "clientes", description = "Client management"),
        (name = "exemplares", description = "Copy management"),
        (name = "emprestimos", description = "Loan management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
