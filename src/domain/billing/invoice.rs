//! Invoices and their status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    DomainError, ErrorCode, Identified, InvoiceId, Severity, StateMachine, Timestamp,
    ValidationError,
};

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Emitida,
    Enviada,
    Paga,
    Vencida,
    Cancelada,
}

impl InvoiceStatus {
    pub fn severity(&self) -> Severity {
        match self {
            InvoiceStatus::Emitida => Severity::Info,
            InvoiceStatus::Enviada => Severity::Info,
            InvoiceStatus::Paga => Severity::Success,
            InvoiceStatus::Vencida => Severity::Danger,
            InvoiceStatus::Cancelada => Severity::Neutral,
        }
    }
}

impl StateMachine for InvoiceStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InvoiceStatus::*;
        matches!(
            (self, target),
            (Emitida, Enviada)
                | (Emitida, Cancelada)
                | (Enviada, Paga)
                | (Enviada, Vencida)
                | (Enviada, Cancelada)
                | (Vencida, Paga)
                | (Vencida, Cancelada)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InvoiceStatus::*;
        match self {
            Emitida => vec![Enviada, Cancelada],
            Enviada => vec![Paga, Vencida, Cancelada],
            Vencida => vec![Paga, Cancelada],
            Paga | Cancelada => vec![],
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvoiceStatus::Emitida => "Emitida",
            InvoiceStatus::Enviada => "Enviada",
            InvoiceStatus::Paga => "Paga",
            InvoiceStatus::Vencida => "Vencida",
            InvoiceStatus::Cancelada => "Cancelada",
        };
        write!(f, "{}", s)
    }
}

/// An issued invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    numero: String,
    cliente: String,
    valor: f64,
    emitida_em: Timestamp,
    vencimento: Timestamp,
    status: InvoiceStatus,
}

impl Invoice {
    pub fn new(
        numero: impl Into<String>,
        cliente: impl Into<String>,
        valor: f64,
        emitida_em: Timestamp,
        vencimento: Timestamp,
    ) -> Result<Self, ValidationError> {
        let numero = numero.into();
        let cliente = cliente.into();
        if numero.trim().is_empty() {
            return Err(ValidationError::empty_field("numero"));
        }
        if cliente.trim().is_empty() {
            return Err(ValidationError::empty_field("cliente"));
        }
        if valor <= 0.0 {
            return Err(ValidationError::invalid_format(
                "valor",
                "Invoice value must be positive",
            ));
        }
        if vencimento.is_before(&emitida_em) {
            return Err(ValidationError::invalid_format(
                "vencimento",
                "Due date precedes issue date",
            ));
        }
        Ok(Self {
            id: InvoiceId::new(),
            numero,
            cliente,
            valor,
            emitida_em,
            vencimento,
            status: InvoiceStatus::Emitida,
        })
    }

    pub fn numero(&self) -> &str {
        &self.numero
    }

    pub fn cliente(&self) -> &str {
        &self.cliente
    }

    pub fn valor(&self) -> f64 {
        self.valor
    }

    pub fn emitida_em(&self) -> Timestamp {
        self.emitida_em
    }

    pub fn vencimento(&self) -> Timestamp {
        self.vencimento
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Performs a validated status transition.
    pub fn transition_status(&mut self, target: InvoiceStatus) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(())
    }
}

impl Identified for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> InvoiceId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn invoice() -> Invoice {
        Invoice::new(
            "NF-2026-0101",
            "Hospital Santa Clara",
            45_300.0,
            ts("2026-03-01T00:00:00Z"),
            ts("2026-03-31T00:00:00Z"),
        )
        .unwrap()
    }

    #[test]
    fn new_invoice_is_emitida() {
        assert_eq!(invoice().status(), InvoiceStatus::Emitida);
    }

    #[test]
    fn new_rejects_non_positive_value() {
        assert!(Invoice::new(
            "NF-1",
            "Cliente",
            0.0,
            ts("2026-03-01T00:00:00Z"),
            ts("2026-03-31T00:00:00Z")
        )
        .is_err());
    }

    #[test]
    fn new_rejects_due_date_before_issue() {
        assert!(Invoice::new(
            "NF-1",
            "Cliente",
            100.0,
            ts("2026-03-31T00:00:00Z"),
            ts("2026-03-01T00:00:00Z")
        )
        .is_err());
    }

    #[test]
    fn overdue_invoice_can_still_be_paid() {
        let mut inv = invoice();
        inv.transition_status(InvoiceStatus::Enviada).unwrap();
        inv.transition_status(InvoiceStatus::Vencida).unwrap();
        inv.transition_status(InvoiceStatus::Paga).unwrap();
        assert_eq!(inv.status(), InvoiceStatus::Paga);
    }

    #[test]
    fn emitida_cannot_jump_to_paga() {
        let mut inv = invoice();
        assert!(inv.transition_status(InvoiceStatus::Paga).is_err());
    }

    #[test]
    fn paga_is_terminal() {
        assert!(InvoiceStatus::Paga.is_terminal());
        assert!(InvoiceStatus::Cancelada.is_terminal());
    }
}
