//! Copy (exemplar) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Physical copy of a book. `disponivel` is owned by the loan workflow:
/// it flips to false when the copy is loaned out and back to true when
/// the loan is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exemplar {
    pub id: i32,
    #[serde(rename = "idLivro")]
    pub livro_id: i32,
    pub disponivel: bool,
}

/// Create/update copy request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ExemplarPayload {
    #[serde(rename = "idLivro")]
    pub livro_id: i32,
    #[serde(default = "default_disponivel")]
    pub disponivel: bool,
}

fn default_disponivel() -> bool {
    true
}
