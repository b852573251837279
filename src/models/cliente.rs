//! Client (cliente) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Client model from database. `apto` marks whether the client is
/// currently eligible to borrow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub apto: bool,
}

/// Create/update client request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClientePayload {
    pub nome: String,
    #[serde(default = "default_apto")]
    pub apto: bool,
}

fn default_apto() -> bool {
    true
}
