//! Managed email accounts (IT administration screen).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAccountId, Identified, Timestamp, ValidationError};

/// An email account provisioned for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAccount {
    id: EmailAccountId,
    endereco: String,
    usuario: String,
    quota_mb: u32,
    created_at: Timestamp,
}

impl EmailAccount {
    pub fn new(
        endereco: impl Into<String>,
        usuario: impl Into<String>,
        quota_mb: u32,
    ) -> Result<Self, ValidationError> {
        let endereco = endereco.into();
        let usuario = usuario.into();
        if !endereco.contains('@') {
            return Err(ValidationError::invalid_format("endereco", "Missing @ symbol"));
        }
        if usuario.trim().is_empty() {
            return Err(ValidationError::empty_field("usuario"));
        }
        if quota_mb == 0 {
            return Err(ValidationError::out_of_range("quota_mb", 1, i64::MAX, 0));
        }
        Ok(Self {
            id: EmailAccountId::new(),
            endereco,
            usuario,
            quota_mb,
            created_at: Timestamp::now(),
        })
    }

    pub fn endereco(&self) -> &str {
        &self.endereco
    }

    pub fn usuario(&self) -> &str {
        &self.usuario
    }

    pub fn quota_mb(&self) -> u32 {
        self.quota_mb
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Identified for EmailAccount {
    type Id = EmailAccountId;

    fn id(&self) -> EmailAccountId {
        self.id
    }
}
