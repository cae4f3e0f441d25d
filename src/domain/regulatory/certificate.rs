//! Good-practices certificates and their two-step creation wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    AttachmentPolicy, AttachmentReference, CertificateId, DomainError, ErrorCode, Identified,
    Severity, StateMachine, Timestamp, ValidationError,
};
use crate::domain::wizard::{AttachmentsConform, Step, StepDefinition, StepSequence};

/// Lifecycle status of a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    #[default]
    Vigente,
    ProximoVencimento,
    Vencida,
    EmRenovacao,
}

impl CertificateStatus {
    pub fn severity(&self) -> Severity {
        match self {
            CertificateStatus::Vigente => Severity::Success,
            CertificateStatus::ProximoVencimento => Severity::Warning,
            CertificateStatus::Vencida => Severity::Danger,
            CertificateStatus::EmRenovacao => Severity::Info,
        }
    }
}

impl StateMachine for CertificateStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CertificateStatus::*;
        matches!(
            (self, target),
            (Vigente, ProximoVencimento)
                | (Vigente, EmRenovacao)
                | (ProximoVencimento, Vencida)
                | (ProximoVencimento, EmRenovacao)
                | (Vencida, EmRenovacao)
                | (EmRenovacao, Vigente)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CertificateStatus::*;
        match self {
            Vigente => vec![ProximoVencimento, EmRenovacao],
            ProximoVencimento => vec![Vencida, EmRenovacao],
            Vencida => vec![EmRenovacao],
            EmRenovacao => vec![Vigente],
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CertificateStatus::Vigente => "Vigente",
            CertificateStatus::ProximoVencimento => "Próximo do Vencimento",
            CertificateStatus::Vencida => "Vencida",
            CertificateStatus::EmRenovacao => "Em Renovação",
        };
        write!(f, "{}", s)
    }
}

/// A certificate of good manufacturing practices on file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    id: CertificateId,
    numero: String,
    emitente: String,
    emitida_em: Timestamp,
    valida_ate: Timestamp,
    status: CertificateStatus,
    documentos: Vec<AttachmentReference>,
}

impl Certificate {
    pub fn new(
        numero: impl Into<String>,
        emitente: impl Into<String>,
        emitida_em: Timestamp,
        valida_ate: Timestamp,
        documentos: Vec<AttachmentReference>,
    ) -> Result<Self, ValidationError> {
        let numero = numero.into();
        let emitente = emitente.into();
        if numero.trim().is_empty() {
            return Err(ValidationError::empty_field("numero_certidao"));
        }
        if emitente.trim().is_empty() {
            return Err(ValidationError::empty_field("emitente"));
        }
        if valida_ate.is_before(&emitida_em) {
            return Err(ValidationError::invalid_format(
                "valida_ate",
                "Expiry date precedes issue date",
            ));
        }
        if documentos.is_empty() {
            return Err(ValidationError::empty_field("documentos"));
        }
        Ok(Self {
            id: CertificateId::new(),
            numero,
            emitente,
            emitida_em,
            valida_ate,
            status: CertificateStatus::Vigente,
            documentos,
        })
    }

    pub fn numero(&self) -> &str {
        &self.numero
    }

    pub fn emitente(&self) -> &str {
        &self.emitente
    }

    pub fn emitida_em(&self) -> Timestamp {
        self.emitida_em
    }

    pub fn valida_ate(&self) -> Timestamp {
        self.valida_ate
    }

    pub fn status(&self) -> CertificateStatus {
        self.status
    }

    pub fn documentos(&self) -> &[AttachmentReference] {
        &self.documentos
    }

    /// Performs a validated status transition.
    pub fn transition_status(&mut self, target: CertificateStatus) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(())
    }

    /// Sets the status without consulting the transition table
    /// (permissive deployments only).
    pub fn force_status(&mut self, target: CertificateStatus) {
        self.status = target;
    }
}

impl Identified for Certificate {
    type Id = CertificateId;

    fn id(&self) -> CertificateId {
        self.id
    }
}

/// Field keys of the certificate wizard.
pub mod fields {
    pub const NUMERO_CERTIDAO: &str = "numero_certidao";
    pub const EMITENTE: &str = "emitente";
    pub const EMITIDA_EM: &str = "emitida_em";
    pub const VALIDA_ATE: &str = "valida_ate";
    pub const DOCUMENTOS: &str = "documentos";
}

/// Steps of the certificate wizard: the two-tab flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateStep {
    DadosCertidao,
    Documentos,
}

impl Step for CertificateStep {
    fn label(&self) -> &'static str {
        match self {
            CertificateStep::DadosCertidao => "Dados da Certidão",
            CertificateStep::Documentos => "Documentos",
        }
    }
}

/// Builds the certificate step sequence.
///
/// The second tab demands at least one conforming document.
pub fn sequence(policy: AttachmentPolicy) -> StepSequence<CertificateStep> {
    StepSequence::new(vec![
        StepDefinition::new(CertificateStep::DadosCertidao)
            .require(fields::NUMERO_CERTIDAO)
            .require(fields::EMITENTE)
            .require(fields::EMITIDA_EM)
            .require(fields::VALIDA_ATE),
        StepDefinition::new(CertificateStep::Documentos)
            .require(fields::DOCUMENTOS)
            .rule(AttachmentsConform::new(fields::DOCUMENTOS, policy)),
    ])
    .expect("certificate sequence is statically valid")
}
