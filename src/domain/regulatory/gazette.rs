//! DOU (Diário Oficial da União) update tracking.
//!
//! Gazette updates are historical records; the `viewed` flag and the
//! optional `relevant` classification are the only fields ever amended
//! after the fact, everything else is immutable.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GazetteUpdateId, Identified, Timestamp, ValidationError};

/// A DOU publication tracked for regulatory impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteUpdate {
    id: GazetteUpdateId,
    publicado_em: Timestamp,
    orgao: String,
    resumo: String,
    viewed: bool,
    relevant: Option<bool>,
}

impl GazetteUpdate {
    pub fn new(
        publicado_em: Timestamp,
        orgao: impl Into<String>,
        resumo: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let orgao = orgao.into();
        let resumo = resumo.into();
        if orgao.trim().is_empty() {
            return Err(ValidationError::empty_field("orgao"));
        }
        if resumo.trim().is_empty() {
            return Err(ValidationError::empty_field("resumo"));
        }
        Ok(Self {
            id: GazetteUpdateId::new(),
            publicado_em,
            orgao,
            resumo,
            viewed: false,
            relevant: None,
        })
    }

    pub fn publicado_em(&self) -> Timestamp {
        self.publicado_em
    }

    pub fn orgao(&self) -> &str {
        &self.orgao
    }

    pub fn resumo(&self) -> &str {
        &self.resumo
    }

    pub fn is_viewed(&self) -> bool {
        self.viewed
    }

    /// Relevance classification: None until someone triages the update.
    pub fn relevant(&self) -> Option<bool> {
        self.relevant
    }

    /// Returns true while the update awaits a relevance decision.
    pub fn is_pending_review(&self) -> bool {
        self.relevant.is_none()
    }

    /// Marks the update as seen. Idempotent.
    pub fn mark_viewed(&mut self) {
        self.viewed = true;
    }

    /// Records the relevance decision; viewing is implied.
    pub fn classify(&mut self, relevant: bool) {
        self.relevant = Some(relevant);
        self.viewed = true;
    }
}

impl Identified for GazetteUpdate {
    type Id = GazetteUpdateId;

    fn id(&self) -> GazetteUpdateId {
        self.id
    }
}

/// Document metadata parsed out of a gazette import.
///
/// Produced by the importer port; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedGazetteDocument {
    pub titulo: String,
    pub orgao: String,
    pub publicado_em: Timestamp,
    pub resumo: String,
}

/// Sorts updates ascending by publication date (stable for ties).
pub fn chronological(updates: &[GazetteUpdate]) -> Vec<GazetteUpdate> {
    let mut sorted = updates.to_vec();
    sorted.sort_by_key(|u| u.publicado_em());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(rfc3339: &str, resumo: &str) -> GazetteUpdate {
        GazetteUpdate::new(
            Timestamp::parse_rfc3339(rfc3339).unwrap(),
            "ANVISA",
            resumo,
        )
        .unwrap()
    }

    #[test]
    fn new_update_is_unviewed_and_unclassified() {
        let u = update("2026-02-10T08:00:00Z", "RDC atualizada");
        assert!(!u.is_viewed());
        assert!(u.is_pending_review());
        assert_eq!(u.relevant(), None);
    }

    #[test]
    fn new_rejects_blank_fields() {
        let ts = Timestamp::now();
        assert!(GazetteUpdate::new(ts, " ", "resumo").is_err());
        assert!(GazetteUpdate::new(ts, "ANVISA", "").is_err());
    }

    #[test]
    fn mark_viewed_is_idempotent() {
        let mut u = update("2026-02-10T08:00:00Z", "RDC atualizada");
        u.mark_viewed();
        u.mark_viewed();
        assert!(u.is_viewed());
        assert!(u.is_pending_review());
    }

    #[test]
    fn classify_sets_relevance_and_implies_viewed() {
        let mut u = update("2026-02-10T08:00:00Z", "RDC atualizada");
        u.classify(true);

        assert_eq!(u.relevant(), Some(true));
        assert!(u.is_viewed());
        assert!(!u.is_pending_review());
    }

    #[test]
    fn classify_can_mark_irrelevant() {
        let mut u = update("2026-02-10T08:00:00Z", "Edital sem relação");
        u.classify(false);
        assert_eq!(u.relevant(), Some(false));
    }

    #[test]
    fn reclassification_replaces_the_decision() {
        let mut u = update("2026-02-10T08:00:00Z", "RDC atualizada");
        u.classify(false);
        u.classify(true);
        assert_eq!(u.relevant(), Some(true));
    }

    #[test]
    fn chronological_orders_by_publication_date() {
        let updates = vec![
            update("2026-03-01T08:00:00Z", "terceira"),
            update("2026-01-15T08:00:00Z", "primeira"),
            update("2026-02-20T08:00:00Z", "segunda"),
        ];

        let sorted = chronological(&updates);
        assert_eq!(sorted[0].resumo(), "primeira");
        assert_eq!(sorted[1].resumo(), "segunda");
        assert_eq!(sorted[2].resumo(), "terceira");
    }
}
