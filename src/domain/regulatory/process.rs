//! RegulatoryProcess aggregate - an ANVISA filing under management.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    DocumentId, DomainError, ErrorCode, Identified, ProcessId, Severity, StateMachine, Timeline,
    TimelineEntry, Timestamp, ValidationError,
};

/// Lifecycle status of a regulatory process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    #[default]
    EmAnalise,
    ExigenciaTecnica,
    Aprovado,
    Indeferido,
    Arquivado,
}

impl ProcessStatus {
    /// Severity driving the status badge.
    pub fn severity(&self) -> Severity {
        match self {
            ProcessStatus::EmAnalise => Severity::Info,
            ProcessStatus::ExigenciaTecnica => Severity::Warning,
            ProcessStatus::Aprovado => Severity::Success,
            ProcessStatus::Indeferido => Severity::Danger,
            ProcessStatus::Arquivado => Severity::Neutral,
        }
    }
}

impl StateMachine for ProcessStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ProcessStatus::*;
        matches!(
            (self, target),
            (EmAnalise, ExigenciaTecnica)
                | (EmAnalise, Aprovado)
                | (EmAnalise, Indeferido)
                | (ExigenciaTecnica, EmAnalise)
                | (ExigenciaTecnica, Indeferido)
                | (Aprovado, Arquivado)
                | (Indeferido, Arquivado)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ProcessStatus::*;
        match self {
            EmAnalise => vec![ExigenciaTecnica, Aprovado, Indeferido],
            ExigenciaTecnica => vec![EmAnalise, Indeferido],
            Aprovado => vec![Arquivado],
            Indeferido => vec![Arquivado],
            Arquivado => vec![],
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessStatus::EmAnalise => "Em Análise",
            ProcessStatus::ExigenciaTecnica => "Exigência Técnica",
            ProcessStatus::Aprovado => "Aprovado",
            ProcessStatus::Indeferido => "Indeferido",
            ProcessStatus::Arquivado => "Arquivado",
        };
        write!(f, "{}", s)
    }
}

/// Area of the regulatory filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryArea {
    ProdutosParaSaude,
    DiagnosticoInVitro,
    EquipamentosMedicos,
}

impl RegulatoryArea {
    /// Parses the snake_case key the wizard stores for this field.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "produtos_para_saude" => Some(RegulatoryArea::ProdutosParaSaude),
            "diagnostico_in_vitro" => Some(RegulatoryArea::DiagnosticoInVitro),
            "equipamentos_medicos" => Some(RegulatoryArea::EquipamentosMedicos),
            _ => None,
        }
    }

    /// The snake_case key stored in wizard data.
    pub fn key(&self) -> &'static str {
        match self {
            RegulatoryArea::ProdutosParaSaude => "produtos_para_saude",
            RegulatoryArea::DiagnosticoInVitro => "diagnostico_in_vitro",
            RegulatoryArea::EquipamentosMedicos => "equipamentos_medicos",
        }
    }
}

impl fmt::Display for RegulatoryArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegulatoryArea::ProdutosParaSaude => "Produtos para Saúde",
            RegulatoryArea::DiagnosticoInVitro => "Diagnóstico In Vitro",
            RegulatoryArea::EquipamentosMedicos => "Equipamentos Médicos",
        };
        write!(f, "{}", s)
    }
}

/// A document row attached to the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDocument {
    id: DocumentId,
    nome: String,
    alterado_em: Timestamp,
}

impl ProcessDocument {
    pub fn new(nome: impl Into<String>, alterado_em: Timestamp) -> Result<Self, ValidationError> {
        let nome = nome.into();
        if nome.trim().is_empty() {
            return Err(ValidationError::empty_field("nome"));
        }
        Ok(Self {
            id: DocumentId::new(),
            nome,
            alterado_em,
        })
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn alterado_em(&self) -> Timestamp {
        self.alterado_em
    }
}

/// The regulatory process aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryProcess {
    id: ProcessId,
    produto: String,
    registro_anvisa: Option<String>,
    area: RegulatoryArea,
    status: ProcessStatus,
    documentos: Vec<ProcessDocument>,
    timeline: Timeline,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl RegulatoryProcess {
    /// Opens a new process in analysis.
    pub fn new(produto: impl Into<String>, area: RegulatoryArea) -> Result<Self, ValidationError> {
        let produto = produto.into();
        if produto.trim().is_empty() {
            return Err(ValidationError::empty_field("produto"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id: ProcessId::new(),
            produto,
            registro_anvisa: None,
            area,
            status: ProcessStatus::EmAnalise,
            documentos: Vec::new(),
            timeline: Timeline::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn produto(&self) -> &str {
        &self.produto
    }

    pub fn registro_anvisa(&self) -> Option<&str> {
        self.registro_anvisa.as_deref()
    }

    pub fn area(&self) -> RegulatoryArea {
        self.area
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Documents in ascending order of change date (stable for ties).
    pub fn documentos_chronological(&self) -> Vec<ProcessDocument> {
        let mut sorted = self.documentos.clone();
        sorted.sort_by_key(|d| d.alterado_em());
        sorted
    }

    pub fn documentos_len(&self) -> usize {
        self.documentos.len()
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations
    // ───────────────────────────────────────────────────────────────

    /// Assigns the ANVISA registration number once granted.
    pub fn set_registro_anvisa(&mut self, registro: impl Into<String>) {
        self.registro_anvisa = Some(registro.into());
        self.updated_at = Timestamp::now();
    }

    /// Performs a validated status transition and records it.
    pub fn transition_status(
        &mut self,
        target: ProcessStatus,
        actor: &str,
    ) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.touch(actor, format!("Status alterado para {}", target));
        Ok(())
    }

    /// Sets the status without consulting the transition table.
    ///
    /// Only reachable when the deployment opts into permissive
    /// transitions; the change is still recorded on the timeline.
    pub fn force_status(&mut self, target: ProcessStatus, actor: &str) {
        self.status = target;
        self.touch(actor, format!("Status alterado para {}", target));
    }

    /// Adds a document row, returning its id for handle registration.
    pub fn add_documento(
        &mut self,
        nome: impl Into<String>,
        alterado_em: Timestamp,
    ) -> Result<DocumentId, ValidationError> {
        let doc = ProcessDocument::new(nome, alterado_em)?;
        let id = doc.id();
        self.documentos.push(doc);
        self.updated_at = Timestamp::now();
        Ok(id)
    }

    /// Removes a document row. Returns false when the id is unknown.
    pub fn remove_documento(&mut self, id: DocumentId) -> bool {
        let before = self.documentos.len();
        self.documentos.retain(|d| d.id() != id);
        let removed = self.documentos.len() != before;
        if removed {
            self.updated_at = Timestamp::now();
        }
        removed
    }

    /// Appends a free-text note to the timeline.
    pub fn record_note(&mut self, actor: &str, content: impl Into<String>) {
        self.touch(actor, content.into());
    }

    fn touch(&mut self, actor: &str, content: String) {
        let now = Timestamp::now();
        if let Ok(entry) = TimelineEntry::new(now, actor, content) {
            self.timeline.append(entry);
        }
        self.updated_at = now;
    }
}

impl Identified for RegulatoryProcess {
    type Id = ProcessId;

    fn id(&self) -> ProcessId {
        self.id
    }
}
