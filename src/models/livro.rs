//! Book (livro) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Livro {
    pub id: i32,
    pub titulo: String,
    pub autor: Option<String>,
    pub isbn: Option<String>,
}

/// Create/update book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LivroPayload {
    pub titulo: String,
    pub autor: Option<String>,
    pub isbn: Option<String>,
}
