//! GetDashboardSummaryHandler - derives the dashboard figures from the
//! four contributing stores.

use std::sync::Arc;

use crate::domain::dashboard::{summarize, DashboardSummary};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{CertificateStore, InvoiceStore, OpportunityStore, ProcessStore};

/// Handler computing the dashboard summary on demand.
pub struct GetDashboardSummaryHandler {
    processes: Arc<dyn ProcessStore>,
    certificates: Arc<dyn CertificateStore>,
    opportunities: Arc<dyn OpportunityStore>,
    invoices: Arc<dyn InvoiceStore>,
}

impl GetDashboardSummaryHandler {
    pub fn new(
        processes: Arc<dyn ProcessStore>,
        certificates: Arc<dyn CertificateStore>,
        opportunities: Arc<dyn OpportunityStore>,
        invoices: Arc<dyn InvoiceStore>,
    ) -> Self {
        Self {
            processes,
            certificates,
            opportunities,
            invoices,
        }
    }

    /// Computes the summary for the given reference instant.
    pub async fn handle(&self, reference: Timestamp) -> Result<DashboardSummary, DomainError> {
        let processes = self.processes.list().await?;
        let certificates = self.certificates.list().await?;
        let opportunities = self.opportunities.list().await?;
        let invoices = self.invoices.list().await?;

        Ok(summarize(
            &processes,
            &certificates,
            &opportunities,
            &invoices,
            reference,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::seed;

    #[tokio::test]
    async fn summary_reflects_the_seed_datasets() {
        let handler = GetDashboardSummaryHandler::new(
            Arc::new(seed::process_store()),
            Arc::new(seed::certificate_store()),
            Arc::new(seed::opportunity_store()),
            Arc::new(seed::invoice_store()),
        );

        let reference = Timestamp::parse_rfc3339("2026-03-15T12:00:00Z").unwrap();
        let summary = handler.handle(reference).await.unwrap();

        assert_eq!(summary.processos_total, seed::PROCESSES.len());
        assert_eq!(summary.certificados_vigentes, 1);
        assert_eq!(summary.oportunidades_ativas, 2);
        assert_eq!(summary.oportunidades_vencidas, 1);
        // One paid invoice in March, two in February.
        assert_eq!(summary.faturamento_mes, 61_200.0);
        let expected = (61_200.0 - (45_300.0 + 38_150.0)) / (45_300.0 + 38_150.0) * 100.0;
        let variance = summary.variacao_mensal.unwrap();
        assert!((variance - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_stores_produce_zeroed_summary() {
        use crate::adapters::memory::InMemoryStore;

        let handler = GetDashboardSummaryHandler::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
        );

        let summary = handler
            .handle(Timestamp::parse_rfc3339("2026-03-15T12:00:00Z").unwrap())
            .await
            .unwrap();
        assert_eq!(summary.processos_total, 0);
        assert_eq!(summary.variacao_mensal, None);
    }
}
