//! Loan workflow service
//!
//! Holds the loan lifecycle rules: a copy must be available to be loaned
//! out and a client must be eligible ("apto") to borrow. Creating a loan
//! flips the copy's `disponivel` flag to false; deleting the loan flips it
//! back to true.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::emprestimo::{Emprestimo, EmprestimoDetails, NovoEmprestimo},
    repository::{ClienteStore, EmprestimoStore, ExemplarStore},
};

#[derive(Clone)]
pub struct EmprestimosService {
    emprestimos: Arc<dyn EmprestimoStore>,
    exemplares: Arc<dyn ExemplarStore>,
    clientes: Arc<dyn ClienteStore>,
}

impl EmprestimosService {
    pub fn new(
        emprestimos: Arc<dyn EmprestimoStore>,
        exemplares: Arc<dyn ExemplarStore>,
        clientes: Arc<dyn ClienteStore>,
    ) -> Self {
        Self {
            emprestimos,
            exemplares,
            clientes,
        }
    }

    /// List loans with pagination, resolving the referenced entities
    pub async fn list(
        &self,
        numero_pagina: i64,
        quantidade: i64,
    ) -> AppResult<(Vec<EmprestimoDetails>, i64)> {
        let (emprestimos, total) = self.emprestimos.list(numero_pagina, quantidade).await?;

        let mut details = Vec::with_capacity(emprestimos.len());
        for emprestimo in emprestimos {
            details.push(self.resolve(emprestimo).await?);
        }

        Ok((details, total))
    }

    /// Get a loan by ID
    pub async fn get(&self, id: i32) -> AppResult<EmprestimoDetails> {
        let emprestimo = self.emprestimos.get_by_id(id).await?;
        self.resolve(emprestimo).await
    }

    /// Create a new loan.
    ///
    /// The copy must exist and be available; the client must exist and be
    /// eligible. The loan row is inserted before the copy is written back
    /// with `disponivel = false`; the two writes are not covered by a
    /// transaction.
    pub async fn create(&self, novo: NovoEmprestimo) -> AppResult<EmprestimoDetails> {
        let mut exemplar = self.exemplares.get_by_id(novo.exemplar_id).await?;
        if !exemplar.disponivel {
            return Err(AppError::ExemplarUnavailable(
                "O exemplar solicitado não está disponível no momento.".to_string(),
            ));
        }

        let cliente = self.clientes.get_by_id(novo.cliente_id).await?;
        if !cliente.apto {
            return Err(AppError::ClientNotEligible(
                "Infelizmente, o cliente é inapto para solicitar um empréstimo.".to_string(),
            ));
        }

        let emprestimo = self.emprestimos.insert(&novo).await?;

        exemplar.disponivel = false;
        let exemplar = self.exemplares.save(&exemplar).await?;

        tracing::info!(
            "Empréstimo criado: id={} exemplar={} cliente={}",
            emprestimo.id,
            exemplar.id,
            cliente.id
        );

        Ok(EmprestimoDetails {
            id: emprestimo.id,
            exemplar,
            cliente,
            data: emprestimo.data,
        })
    }

    /// Update a loan, reassigning its copy and client references.
    ///
    /// The new references must exist, but availability and eligibility are
    /// not re-checked here; only creation enforces those rules.
    pub async fn update(&self, id: i32, novo: NovoEmprestimo) -> AppResult<EmprestimoDetails> {
        let emprestimo = self.emprestimos.get_by_id(id).await?;
        let exemplar = self.exemplares.get_by_id(novo.exemplar_id).await?;
        let cliente = self.clientes.get_by_id(novo.cliente_id).await?;

        let saved = self
            .emprestimos
            .save(&Emprestimo {
                id: emprestimo.id,
                exemplar_id: exemplar.id,
                cliente_id: cliente.id,
                data: novo.data,
            })
            .await?;

        Ok(EmprestimoDetails {
            id: saved.id,
            exemplar,
            cliente,
            data: saved.data,
        })
    }

    /// Delete a loan, releasing its copy.
    ///
    /// The copy is written back with `disponivel = true` before the loan
    /// row is removed.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let emprestimo = self.emprestimos.get_by_id(id).await?;

        let mut exemplar = self.exemplares.get_by_id(emprestimo.exemplar_id).await?;
        exemplar.disponivel = true;
        self.exemplares.save(&exemplar).await?;

        self.emprestimos.delete(emprestimo.id).await?;

        tracing::info!(
            "Empréstimo removido: id={} exemplar={} liberado",
            emprestimo.id,
            exemplar.id
        );

        Ok(())
    }

    async fn resolve(&self, emprestimo: Emprestimo) -> AppResult<EmprestimoDetails> {
        let exemplar = self.exemplares.get_by_id(emprestimo.exemplar_id).await?;
        let cliente = self.clientes.get_by_id(emprestimo.cliente_id).await?;

        Ok(EmprestimoDetails {
            id: emprestimo.id,
            exemplar,
            cliente,
            data: emprestimo.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cliente::Cliente;
    use crate::models::exemplar::Exemplar;
    use crate::repository::clientes::MockClienteStore;
    use crate::repository::emprestimos::MockEmprestimoStore;
    use crate::repository::exemplares::MockExemplarStore;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn exemplar(id: i32, disponivel: bool) -> Exemplar {
        Exemplar {
            id,
            livro_id: 1,
            disponivel,
        }
    }

    fn cliente(id: i32, apto: bool) -> Cliente {
        Cliente {
            id,
            nome: "Maria Silva".to_string(),
            apto,
        }
    }

    fn data() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn service(
        emprestimos: MockEmprestimoStore,
        exemplares: MockExemplarStore,
        clientes: MockClienteStore,
    ) -> EmprestimosService {
        EmprestimosService::new(Arc::new(emprestimos), Arc::new(exemplares), Arc::new(clientes))
    }

    #[tokio::test]
    async fn create_persists_loan_then_marks_copy_unavailable() {
        let mut emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let mut clientes = MockClienteStore::new();
        let mut seq = Sequence::new();

        exemplares
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(exemplar(id, true)));
        clientes
            .expect_get_by_id()
            .with(eq(5))
            .returning(|id| Ok(cliente(id, true)));
        emprestimos
            .expect_insert()
            .withf(|novo| novo.exemplar_id == 1 && novo.cliente_id == 5)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|novo| {
                Ok(Emprestimo {
                    id: 10,
                    exemplar_id: novo.exemplar_id,
                    cliente_id: novo.cliente_id,
                    data: novo.data,
                })
            });
        exemplares
            .expect_save()
            .withf(|ex| ex.id == 1 && !ex.disponivel)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|ex| Ok(ex.clone()));

        let service = service(emprestimos, exemplares, clientes);
        let details = service
            .create(NovoEmprestimo {
                exemplar_id: 1,
                cliente_id: 5,
                data: data(),
            })
            .await
            .unwrap();

        assert_eq!(details.id, 10);
        assert_eq!(details.exemplar.id, 1);
        assert!(!details.exemplar.disponivel);
        assert_eq!(details.cliente.id, 5);
        assert_eq!(details.data, data());
    }

    #[tokio::test]
    async fn create_rejects_unavailable_copy_without_persisting() {
        let emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let clientes = MockClienteStore::new();

        exemplares
            .expect_get_by_id()
            .with(eq(2))
            .returning(|id| Ok(exemplar(id, false)));

        let service = service(emprestimos, exemplares, clientes);
        let err = service
            .create(NovoEmprestimo {
                exemplar_id: 2,
                cliente_id: 5,
                data: data(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExemplarUnavailable(_)));
    }

    #[tokio::test]
    async fn create_rejects_ineligible_client_without_persisting() {
        let emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let mut clientes = MockClienteStore::new();

        exemplares
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(exemplar(id, true)));
        clientes
            .expect_get_by_id()
            .with(eq(6))
            .returning(|id| Ok(cliente(id, false)));

        let service = service(emprestimos, exemplares, clientes);
        let err = service
            .create(NovoEmprestimo {
                exemplar_id: 1,
                cliente_id: 6,
                data: data(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ClientNotEligible(_)));
    }

    #[tokio::test]
    async fn create_fails_when_copy_is_missing() {
        let emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let clientes = MockClienteStore::new();

        exemplares.expect_get_by_id().with(eq(99)).returning(|id| {
            Err(AppError::NotFound(format!(
                "Exemplar com id {} não encontrado",
                id
            )))
        });

        let service = service(emprestimos, exemplares, clientes);
        let err = service
            .create(NovoEmprestimo {
                exemplar_id: 99,
                cliente_id: 5,
                data: data(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_fails_when_client_is_missing() {
        let emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let mut clientes = MockClienteStore::new();

        exemplares
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(exemplar(id, true)));
        clientes.expect_get_by_id().with(eq(99)).returning(|id| {
            Err(AppError::NotFound(format!(
                "Cliente com id {} não encontrado",
                id
            )))
        });

        let service = service(emprestimos, exemplares, clientes);
        let err = service
            .create(NovoEmprestimo {
                exemplar_id: 1,
                cliente_id: 99,
                data: data(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_returns_matching_loan() {
        let mut emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let mut clientes = MockClienteStore::new();

        emprestimos.expect_get_by_id().with(eq(7)).returning(|id| {
            Ok(Emprestimo {
                id,
                exemplar_id: 1,
                cliente_id: 5,
                data: data(),
            })
        });
        exemplares
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(exemplar(id, false)));
        clientes
            .expect_get_by_id()
            .with(eq(5))
            .returning(|id| Ok(cliente(id, true)));

        let service = service(emprestimos, exemplares, clientes);
        let details = service.get(7).await.unwrap();

        assert_eq!(details.id, 7);
        assert_eq!(details.exemplar.id, 1);
        assert_eq!(details.cliente.id, 5);
    }

    #[tokio::test]
    async fn get_fails_for_missing_loan() {
        let mut emprestimos = MockEmprestimoStore::new();
        let exemplares = MockExemplarStore::new();
        let clientes = MockClienteStore::new();

        emprestimos.expect_get_by_id().with(eq(404)).returning(|id| {
            Err(AppError::NotFound(format!(
                "Empréstimo com id {} não encontrado",
                id
            )))
        });

        let service = service(emprestimos, exemplares, clientes);
        let err = service.get(404).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_releases_copy_before_removing_loan() {
        let mut emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let clientes = MockClienteStore::new();
        let mut seq = Sequence::new();

        emprestimos.expect_get_by_id().with(eq(10)).returning(|id| {
            Ok(Emprestimo {
                id,
                exemplar_id: 1,
                cliente_id: 5,
                data: data(),
            })
        });
        exemplares
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(exemplar(id, false)));
        exemplares
            .expect_save()
            .withf(|ex| ex.id == 1 && ex.disponivel)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|ex| Ok(ex.clone()));
        emprestimos
            .expect_delete()
            .with(eq(10))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = service(emprestimos, exemplares, clientes);
        service.delete(10).await.unwrap();
    }

    #[tokio::test]
    async fn delete_fails_for_missing_loan() {
        let mut emprestimos = MockEmprestimoStore::new();
        let exemplares = MockExemplarStore::new();
        let clientes = MockClienteStore::new();

        emprestimos.expect_get_by_id().with(eq(404)).returning(|id| {
            Err(AppError::NotFound(format!(
                "Empréstimo com id {} não encontrado",
                id
            )))
        });

        let service = service(emprestimos, exemplares, clientes);
        let err = service.delete(404).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_reassigns_references_without_rechecking_rules() {
        let mut emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let mut clientes = MockClienteStore::new();

        emprestimos.expect_get_by_id().with(eq(3)).returning(|id| {
            Ok(Emprestimo {
                id,
                exemplar_id: 1,
                cliente_id: 5,
                data: data(),
            })
        });
        // The reassigned copy is unavailable and the client is not apt;
        // update accepts both.
        exemplares
            .expect_get_by_id()
            .with(eq(2))
            .returning(|id| Ok(exemplar(id, false)));
        clientes
            .expect_get_by_id()
            .with(eq(6))
            .returning(|id| Ok(cliente(id, false)));
        emprestimos
            .expect_save()
            .withf(|e| e.id == 3 && e.exemplar_id == 2 && e.cliente_id == 6)
            .returning(|e| Ok(e.clone()));

        let service = service(emprestimos, exemplares, clientes);
        let details = service
            .update(
                3,
                NovoEmprestimo {
                    exemplar_id: 2,
                    cliente_id: 6,
                    data: data(),
                },
            )
            .await
            .unwrap();

        assert_eq!(details.id, 3);
        assert_eq!(details.exemplar.id, 2);
        assert_eq!(details.cliente.id, 6);
    }

    #[tokio::test]
    async fn list_resolves_references_for_each_loan() {
        let mut emprestimos = MockEmprestimoStore::new();
        let mut exemplares = MockExemplarStore::new();
        let mut clientes = MockClienteStore::new();

        emprestimos
            .expect_list()
            .with(eq(0), eq(5))
            .returning(|_, _| {
                Ok((
                    vec![
                        Emprestimo {
                            id: 1,
                            exemplar_id: 1,
                            cliente_id: 5,
                            data: data(),
                        },
                        Emprestimo {
                            id: 2,
                            exemplar_id: 2,
                            cliente_id: 5,
                            data: data(),
                        },
                    ],
                    2,
                ))
            });
        exemplares
            .expect_get_by_id()
            .returning(|id| Ok(exemplar(id, false)));
        clientes
            .expect_get_by_id()
            .returning(|id| Ok(cliente(id, true)));

        let service = service(emprestimos, exemplares, clientes);
        let (details, total) = service.list(0, 5).await.unwrap();

        assert_eq!(total, 2);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].id, 1);
        assert_eq!(details[1].exemplar.id, 2);
    }
}
