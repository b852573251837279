//! Client management service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::cliente::{Cliente, ClientePayload},
    repository::ClienteStore,
};

#[derive(Clone)]
pub struct ClientesService {
    clientes: Arc<dyn ClienteStore>,
}

impl ClientesService {
    pub fn new(clientes: Arc<dyn ClienteStore>) -> Self {
        Self { clientes }
    }

    pub async fn list(&self, numero_pagina: i64, quantidade: i64) -> AppResult<(Vec<Cliente>, i64)> {
        self.clientes.list(numero_pagina, quantidade).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Cliente> {
        self.clientes.get_by_id(id).await
    }

    pub async fn create(&self, payload: ClientePayload) -> AppResult<Cliente> {
        self.clientes.insert(&payload).await
    }

    pub async fn update(&self, id: i32, payload: ClientePayload) -> AppResult<Cliente> {
        self.clientes.update(id, &payload).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.clientes.delete(id).await
    }
}
