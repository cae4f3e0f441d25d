//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and field validation.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("File '{name}' is {size} bytes, above the {max} byte limit")]
    FileTooLarge { name: String, size: u64, max: u64 },

    #[error("File '{name}' has extension '.{extension}', which is not accepted")]
    ExtensionNotAllowed { name: String, extension: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    FileTooLarge,
    ExtensionNotAllowed,

    // Not found errors
    WizardNotFound,
    ProcessNotFound,
    CertificateNotFound,
    OpportunityNotFound,
    RequisitionNotFound,
    CompanyNotFound,
    InvoiceNotFound,
    GazetteUpdateNotFound,
    EmailAccountNotFound,

    // State errors
    InvalidStateTransition,
    StepBlocked,
    StepNotInSequence,
    PhaseLocked,
    AlreadySubmitted,
    ConfirmationRequired,
    ImportCancelled,

    // Infrastructure errors
    StoreError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::FileTooLarge => "FILE_TOO_LARGE",
            ErrorCode::ExtensionNotAllowed => "EXTENSION_NOT_ALLOWED",
            ErrorCode::WizardNotFound => "WIZARD_NOT_FOUND",
            ErrorCode::ProcessNotFound => "PROCESS_NOT_FOUND",
            ErrorCode::CertificateNotFound => "CERTIFICATE_NOT_FOUND",
            ErrorCode::OpportunityNotFound => "OPPORTUNITY_NOT_FOUND",
            ErrorCode::RequisitionNotFound => "REQUISITION_NOT_FOUND",
            ErrorCode::CompanyNotFound => "COMPANY_NOT_FOUND",
            ErrorCode::InvoiceNotFound => "INVOICE_NOT_FOUND",
            ErrorCode::GazetteUpdateNotFound => "GAZETTE_UPDATE_NOT_FOUND",
            ErrorCode::EmailAccountNotFound => "EMAIL_ACCOUNT_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::StepBlocked => "STEP_BLOCKED",
            ErrorCode::StepNotInSequence => "STEP_NOT_IN_SEQUENCE",
            ErrorCode::PhaseLocked => "PHASE_LOCKED",
            ErrorCode::AlreadySubmitted => "ALREADY_SUBMITTED",
            ErrorCode::ConfirmationRequired => "CONFIRMATION_REQUIRED",
            ErrorCode::ImportCancelled => "IMPORT_CANCELLED",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::FileTooLarge { .. } => ErrorCode::FileTooLarge,
            ValidationError::ExtensionNotAllowed { .. } => ErrorCode::ExtensionNotAllowed,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("razao_social");
        assert_eq!(format!("{}", err), "Field 'razao_social' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("quantidade", 1, 999, 0);
        assert_eq!(
            format!("{}", err),
            "Field 'quantidade' must be between 1 and 999, got 0"
        );
    }

    #[test]
    fn validation_error_file_too_large_displays_name_and_limit() {
        let err = ValidationError::FileTooLarge {
            name: "manual.pdf".to_string(),
            size: 10_485_761,
            max: 10_485_760,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("manual.pdf"));
        assert!(msg.contains("10485761"));
        assert!(msg.contains("10485760"));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ProcessNotFound, "Process not found");
        assert_eq!(format!("{}", err), "[PROCESS_NOT_FOUND] Process not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "cnpj")
            .with_detail("reason", "must have 14 digits");

        assert_eq!(err.details.get("field"), Some(&"cnpj".to_string()));
        assert_eq!(
            err.details.get("reason"),
            Some(&"must have 14 digits".to_string())
        );
    }

    #[test]
    fn validation_error_converts_to_domain_error_with_matching_code() {
        let err: DomainError = ValidationError::empty_field("produto").into();
        assert_eq!(err.code, ErrorCode::EmptyField);

        let err: DomainError = ValidationError::ExtensionNotAllowed {
            name: "foto.png".to_string(),
            extension: "png".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ExtensionNotAllowed);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::PhaseLocked), "PHASE_LOCKED");
        assert_eq!(format!("{}", ErrorCode::StepBlocked), "STEP_BLOCKED");
    }
}
