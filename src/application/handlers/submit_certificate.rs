//! SubmitCertificateHandler - terminal submission of the certificate
//! wizard.

use std::sync::Arc;

use crate::application::sessions::{SessionError, WizardSessions};
use crate::domain::foundation::{
    AttachmentReference, CertificateId, DomainError, ErrorCode, Identified, Timestamp, WizardId,
};
use crate::domain::regulatory::certificate::fields;
use crate::domain::regulatory::{Certificate, CertificateStep};
use crate::domain::wizard::WizardData;
use crate::ports::{CertificateStore, Notice, Notifier};

/// Command to submit the certificate wizard.
#[derive(Debug, Clone)]
pub struct SubmitCertificateCommand {
    pub wizard_id: WizardId,
}

/// Result of a successful submission.
#[derive(Debug)]
pub struct SubmitCertificateResult {
    pub certificate_id: CertificateId,
}

/// Error type for certificate submission.
#[derive(Debug, Clone)]
pub enum SubmitCertificateError {
    WizardNotFound(WizardId),
    Blocked(Vec<String>),
    Domain(DomainError),
}

impl std::fmt::Display for SubmitCertificateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitCertificateError::WizardNotFound(id) => write!(f, "Wizard not found: {}", id),
            SubmitCertificateError::Blocked(reasons) => {
                write!(f, "Submission blocked: {}", reasons.join("; "))
            }
            SubmitCertificateError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitCertificateError {}

impl From<DomainError> for SubmitCertificateError {
    fn from(err: DomainError) -> Self {
        SubmitCertificateError::Domain(err)
    }
}

/// Handler for certificate submissions.
pub struct SubmitCertificateHandler {
    sessions: Arc<WizardSessions<CertificateStep>>,
    certificates: Arc<dyn CertificateStore>,
    notifier: Arc<dyn Notifier>,
}

impl SubmitCertificateHandler {
    pub fn new(
        sessions: Arc<WizardSessions<CertificateStep>>,
        certificates: Arc<dyn CertificateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sessions,
            certificates,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitCertificateCommand,
    ) -> Result<SubmitCertificateResult, SubmitCertificateError> {
        // 1. Take the final snapshot
        let snapshot = match self.sessions.submit(cmd.wizard_id) {
            Ok(snapshot) => snapshot,
            Err(SessionError::WizardNotFound(id)) => {
                return Err(SubmitCertificateError::WizardNotFound(id));
            }
            Err(SessionError::Blocked(blocked)) => {
                for reason in blocked.reasons() {
                    self.notifier.notify(Notice::warning(reason.clone()));
                }
                return Err(SubmitCertificateError::Blocked(blocked.reasons().to_vec()));
            }
        };

        // 2. Build the certificate from the snapshot
        let documentos: Vec<AttachmentReference> = snapshot
            .attachments(fields::DOCUMENTOS)
            .into_iter()
            .cloned()
            .collect();
        let certificate = Certificate::new(
            snapshot.text(fields::NUMERO_CERTIDAO).unwrap_or_default(),
            snapshot.text(fields::EMITENTE).unwrap_or_default(),
            date_field(&snapshot, fields::EMITIDA_EM)?,
            date_field(&snapshot, fields::VALIDA_ATE)?,
            documentos,
        )
        .map_err(DomainError::from)?;

        // 3. Persist and notify
        self.certificates.upsert(&certificate).await?;
        tracing::info!(certificate_id = %certificate.id(), "certificate registered");
        self.notifier.notify(Notice::success(format!(
            "Certidão {} cadastrada",
            certificate.numero()
        )));

        Ok(SubmitCertificateResult {
            certificate_id: certificate.id(),
        })
    }
}

/// Reads a date field stored either as a date value or as `YYYY-MM-DD`
/// text, normalized to midnight UTC.
fn date_field(data: &WizardData, key: &str) -> Result<Timestamp, DomainError> {
    if let Some(date) = data.date(key) {
        return Ok(Timestamp::parse_rfc3339(&format!("{}T00:00:00Z", date))
            .expect("NaiveDate always formats as a valid RFC 3339 date"));
    }
    let text = data
        .text(key)
        .ok_or_else(|| DomainError::validation(key, "Date field is missing"))?;
    Timestamp::parse_rfc3339(&format!("{}T00:00:00Z", text.trim())).map_err(|_| {
        DomainError::new(
            ErrorCode::InvalidFormat,
            format!("Field '{}' is not a valid date: {}", key, text),
        )
    })
}
