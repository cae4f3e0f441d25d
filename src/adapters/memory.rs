//! In-memory store adapter.
//!
//! The production adapter for this UI-only system and the test double at
//! once: each screen's top-level list lives in process memory behind the
//! store ports, with replace-by-id / prepend-new upsert semantics.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned, which only happens
//! after another panic mid-write.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::billing::{Invoice, InvoiceStatus};
use crate::domain::commercial::{Opportunity, OpportunityPhase};
use crate::domain::corporate::{Company, CompanyStatus, EmailAccount};
use crate::domain::foundation::{DomainError, ErrorCode, Identified, Store};
use crate::domain::procurement::{Requisition, RequisitionStatus};
use crate::domain::regulatory::{
    Certificate, CertificateStatus, GazetteUpdate, ProcessStatus, RegulatoryProcess,
};
use crate::ports::{
    CertificateStore, CompanyStore, EmailAccountStore, GazetteStore, InvoiceStore,
    OpportunityStore, ProcessStore, RequisitionStore,
};

/// Generic in-memory list store.
pub struct InMemoryStore<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Identified + Clone> InMemoryStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-loaded with seed data.
    pub fn seeded(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    fn with_items<R>(&self, f: impl FnOnce(&Vec<T>) -> R) -> R {
        f(&self.items.read().expect("InMemoryStore: lock poisoned"))
    }

    fn with_items_mut<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        f(&mut self.items.write().expect("InMemoryStore: lock poisoned"))
    }
}

impl<T: Identified + Clone> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Store<T, T::Id> for InMemoryStore<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.with_items(|items| items.clone()))
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError> {
        Ok(self.with_items(|items| items.iter().find(|i| i.id() == id).cloned()))
    }

    async fn upsert(&self, entity: &T) -> Result<(), DomainError> {
        self.with_items_mut(|items| {
            if let Some(pos) = items.iter().position(|i| i.id() == entity.id()) {
                items[pos] = entity.clone();
            } else {
                items.insert(0, entity.clone());
            }
        });
        Ok(())
    }

    async fn remove(&self, id: T::Id) -> Result<(), DomainError> {
        self.with_items_mut(|items| {
            let before = items.len();
            items.retain(|i| i.id() != id);
            if items.len() == before {
                Err(DomainError::new(
                    ErrorCode::StoreError,
                    format!("Item {:?} not found", id),
                ))
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl ProcessStore for InMemoryStore<RegulatoryProcess> {
    async fn find_by_status(
        &self,
        status: ProcessStatus,
    ) -> Result<Vec<RegulatoryProcess>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|p| p.status() == status).cloned().collect()
        }))
    }
}

#[async_trait]
impl CertificateStore for InMemoryStore<Certificate> {
    async fn find_by_status(
        &self,
        status: CertificateStatus,
    ) -> Result<Vec<Certificate>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|c| c.status() == status).cloned().collect()
        }))
    }
}

#[async_trait]
impl OpportunityStore for InMemoryStore<Opportunity> {
    async fn find_by_phase(
        &self,
        phase: OpportunityPhase,
    ) -> Result<Vec<Opportunity>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|o| o.phase() == phase).cloned().collect()
        }))
    }
}

#[async_trait]
impl RequisitionStore for InMemoryStore<Requisition> {
    async fn find_by_status(
        &self,
        status: RequisitionStatus,
    ) -> Result<Vec<Requisition>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|r| r.status() == status).cloned().collect()
        }))
    }
}

#[async_trait]
impl CompanyStore for InMemoryStore<Company> {
    async fn find_by_status(&self, status: CompanyStatus) -> Result<Vec<Company>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|c| c.status() == status).cloned().collect()
        }))
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Company>, DomainError> {
        Ok(self.with_items(|items| items.iter().find(|c| c.cnpj() == cnpj).cloned()))
    }
}

#[async_trait]
impl InvoiceStore for InMemoryStore<Invoice> {
    async fn find_by_status(&self, status: InvoiceStatus) -> Result<Vec<Invoice>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|i| i.status() == status).cloned().collect()
        }))
    }
}

#[async_trait]
impl GazetteStore for InMemoryStore<GazetteUpdate> {
    async fn find_pending_review(&self) -> Result<Vec<GazetteUpdate>, DomainError> {
        Ok(self.with_items(|items| {
            items.iter().filter(|u| u.is_pending_review()).cloned().collect()
        }))
    }
}

#[async_trait]
impl EmailAccountStore for InMemoryStore<EmailAccount> {
    async fn find_by_address(&self, endereco: &str) -> Result<Option<EmailAccount>, DomainError> {
        Ok(self.with_items(|items| items.iter().find(|a| a.endereco() == endereco).cloned()))
    }
}
