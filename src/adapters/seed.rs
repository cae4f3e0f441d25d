//! Seed datasets - the mock data each screen loads once.
//!
//! These stand in for what a real deployment would fetch from an API.
//! Each dataset is built on first access and never revalidated.

use once_cell::sync::Lazy;

use crate::domain::billing::{Invoice, InvoiceStatus};
use crate::domain::commercial::{Opportunity, OpportunityStatus, ParticipationData};
use crate::domain::corporate::{Company, CompanyStatus, EmailAccount};
use crate::domain::foundation::{AttachmentReference, Timestamp};
use crate::domain::procurement::{Requisition, RequisitionItem, RequisitionStatus, SupplierQuote};
use crate::domain::regulatory::{
    Certificate, CertificateStatus, GazetteUpdate, RegulatoryArea, RegulatoryProcess,
};

use super::memory::InMemoryStore;

fn ts(s: &str) -> Timestamp {
    Timestamp::parse_rfc3339(s).expect("seed timestamp is valid")
}

fn pdf(name: &str, size: u64) -> AttachmentReference {
    AttachmentReference::new(name, size).expect("seed attachment is valid")
}

/// Regulatory processes under management.
pub static PROCESSES: Lazy<Vec<RegulatoryProcess>> = Lazy::new(|| {
    let mut em_analise = RegulatoryProcess::new(
        "Monitor Multiparamétrico MX-550",
        RegulatoryArea::EquipamentosMedicos,
    )
    .expect("seed process is valid");
    em_analise.add_documento("dossiê técnico.pdf", ts("2026-01-12T09:30:00Z"))
        .expect("seed document is valid");
    em_analise.add_documento("instruções de uso.pdf", ts("2026-02-03T14:00:00Z"))
        .expect("seed document is valid");

    let mut exigencia = RegulatoryProcess::new(
        "Ventilador Pulmonar VP-300",
        RegulatoryArea::EquipamentosMedicos,
    )
    .expect("seed process is valid");
    exigencia
        .transition_status(crate::domain::regulatory::ProcessStatus::ExigenciaTecnica, "ana.reis")
        .expect("seed transition is valid");

    let mut aprovado = RegulatoryProcess::new(
        "Teste Rápido COVID-19 AG",
        RegulatoryArea::DiagnosticoInVitro,
    )
    .expect("seed process is valid");
    aprovado
        .transition_status(crate::domain::regulatory::ProcessStatus::Aprovado, "ana.reis")
        .expect("seed transition is valid");
    aprovado.set_registro_anvisa("80146300015");

    vec![em_analise, exigencia, aprovado]
});

/// Certificates of good manufacturing practices.
pub static CERTIFICATES: Lazy<Vec<Certificate>> = Lazy::new(|| {
    let vigente = Certificate::new(
        "CBPF-2025-0412",
        "ANVISA",
        ts("2025-06-01T00:00:00Z"),
        ts("2027-06-01T00:00:00Z"),
        vec![pdf("certidao_cbpf.pdf", 482_133)],
    )
    .expect("seed certificate is valid");

    let mut proximo = Certificate::new(
        "CBPF-2024-0077",
        "ANVISA",
        ts("2024-04-15T00:00:00Z"),
        ts("2026-04-15T00:00:00Z"),
        vec![pdf("certidao_renovacao.pdf", 390_271)],
    )
    .expect("seed certificate is valid");
    proximo
        .transition_status(CertificateStatus::ProximoVencimento)
        .expect("seed transition is valid");

    vec![vigente, proximo]
});

/// Bid opportunities across both phases.
pub static OPPORTUNITIES: Lazy<Vec<Opportunity>> = Lazy::new(|| {
    let triagem = Opportunity::new(
        "Secretaria Municipal de Saúde de Campinas",
        "Aquisição de 12 monitores multiparamétricos",
        318_000.0,
    )
    .expect("seed opportunity is valid");

    let mut participacao = Opportunity::new(
        "Hospital Regional do Vale",
        "Locação de ventiladores pulmonares",
        540_000.0,
    )
    .expect("seed opportunity is valid");
    participacao
        .transition_status(OpportunityStatus::EmParticipacao, "carla.mendes")
        .expect("seed transition is valid");
    participacao
        .update_participation(ParticipationData {
            valor_proposta: Some(512_400.0),
            numero_pregao: Some("PE 42/2026".to_string()),
        })
        .expect("seed participation is valid");

    let mut vencida = Opportunity::new(
        "Consórcio Intermunicipal de Saúde",
        "Fornecimento de oxímetros de pulso",
        96_500.0,
    )
    .expect("seed opportunity is valid");
    vencida
        .transition_status(OpportunityStatus::EmParticipacao, "carla.mendes")
        .expect("seed transition is valid");
    vencida
        .transition_status(OpportunityStatus::Vencida, "carla.mendes")
        .expect("seed transition is valid");

    vec![triagem, participacao, vencida]
});

/// Supply requisitions.
pub static REQUISITIONS: Lazy<Vec<Requisition>> = Lazy::new(|| {
    let cotada = Requisition::new(
        "almoxarifado",
        vec![RequisitionItem {
            descricao: "Cabo ECG 5 vias".to_string(),
            quantidade: 10,
        }],
        vec![
            SupplierQuote {
                fornecedor: "Eletromed Suprimentos".to_string(),
                valor: 1_180.0,
            },
            SupplierQuote {
                fornecedor: "BioParts Ltda".to_string(),
                valor: 1_240.0,
            },
            SupplierQuote {
                fornecedor: "MedCabos Distribuidora".to_string(),
                valor: 1_310.0,
            },
        ],
        None,
    )
    .expect("seed requisition is valid");

    let mut justificada = Requisition::new(
        "engenharia.clinica",
        vec![RequisitionItem {
            descricao: "Sensor SpO2 proprietário MX-550".to_string(),
            quantidade: 4,
        }],
        vec![SupplierQuote {
            fornecedor: "Fabricante exclusivo".to_string(),
            valor: 4_080.0,
        }],
        Some("Peça exclusiva do fabricante, sem fornecedores alternativos".to_string()),
    )
    .expect("seed requisition is valid");
    justificada
        .transition_status(RequisitionStatus::EmCotacao)
        .expect("seed transition is valid");

    vec![cotada, justificada]
});

/// Tenant companies.
pub static COMPANIES: Lazy<Vec<Company>> = Lazy::new(|| {
    let mut ativa = Company::new(
        "MedSul Distribuidora Ltda",
        "12.345.678/0001-95",
        "contato@medsul.com.br",
    )
    .expect("seed company is valid");
    ativa
        .transition_status(CompanyStatus::Ativa)
        .expect("seed transition is valid");

    let pendente = Company::new(
        "Norte Hospitalar Equipamentos SA",
        "98.765.432/0001-10",
        "cadastro@nortehospitalar.com.br",
    )
    .expect("seed company is valid");

    vec![ativa, pendente]
});

/// Issued invoices across two months, for the variance figures.
pub static INVOICES: Lazy<Vec<Invoice>> = Lazy::new(|| {
    let paid = |numero: &str, cliente: &str, valor: f64, emitida: &str| {
        let mut inv = Invoice::new(numero, cliente, valor, ts(emitida), ts(emitida).add_days(30))
            .expect("seed invoice is valid");
        inv.transition_status(InvoiceStatus::Enviada)
            .expect("seed transition is valid");
        inv.transition_status(InvoiceStatus::Paga)
            .expect("seed transition is valid");
        inv
    };

    let mut aberta = Invoice::new(
        "NF-2026-0319",
        "Clínica São Lucas",
        27_800.0,
        ts("2026-03-18T00:00:00Z"),
        ts("2026-04-17T00:00:00Z"),
    )
    .expect("seed invoice is valid");
    aberta
        .transition_status(InvoiceStatus::Enviada)
        .expect("seed transition is valid");

    vec![
        paid("NF-2026-0201", "Hospital Santa Clara", 45_300.0, "2026-02-06T00:00:00Z"),
        paid("NF-2026-0214", "Hospital Regional do Vale", 38_150.0, "2026-02-20T00:00:00Z"),
        paid("NF-2026-0302", "Hospital Santa Clara", 61_200.0, "2026-03-04T00:00:00Z"),
        aberta,
    ]
});

/// DOU updates awaiting triage.
pub static GAZETTE_UPDATES: Lazy<Vec<GazetteUpdate>> = Lazy::new(|| {
    let mut classificada = GazetteUpdate::new(
        ts("2026-02-11T08:00:00Z"),
        "ANVISA",
        "RDC nº 938/2026 - atualização de requisitos para equipamentos eletromédicos",
    )
    .expect("seed gazette update is valid");
    classificada.classify(true);

    let pendente = GazetteUpdate::new(
        ts("2026-03-09T08:00:00Z"),
        "Ministério da Saúde",
        "Portaria sobre aquisição centralizada de ventiladores",
    )
    .expect("seed gazette update is valid");

    vec![classificada, pendente]
});

/// Managed email accounts.
pub static EMAIL_ACCOUNTS: Lazy<Vec<EmailAccount>> = Lazy::new(|| {
    vec![
        EmailAccount::new("ana.reis@caduceu.med.br", "Ana Reis", 4096)
            .expect("seed account is valid"),
        EmailAccount::new("carla.mendes@caduceu.med.br", "Carla Mendes", 4096)
            .expect("seed account is valid"),
        EmailAccount::new("suporte@caduceu.med.br", "Suporte TI", 8192)
            .expect("seed account is valid"),
    ]
});

/// Builds a process store pre-loaded with the seed dataset.
pub fn process_store() -> InMemoryStore<RegulatoryProcess> {
    InMemoryStore::seeded(PROCESSES.clone())
}

/// Builds a certificate store pre-loaded with the seed dataset.
pub fn certificate_store() -> InMemoryStore<Certificate> {
    InMemoryStore::seeded(CERTIFICATES.clone())
}

/// Builds an opportunity store pre-loaded with the seed dataset.
pub fn opportunity_store() -> InMemoryStore<Opportunity> {
    InMemoryStore::seeded(OPPORTUNITIES.clone())
}

/// Builds a requisition store pre-loaded with the seed dataset.
pub fn requisition_store() -> InMemoryStore<Requisition> {
    InMemoryStore::seeded(REQUISITIONS.clone())
}

/// Builds a company store pre-loaded with the seed dataset.
pub fn company_store() -> InMemoryStore<Company> {
    InMemoryStore::seeded(COMPANIES.clone())
}

/// Builds an invoice store pre-loaded with the seed dataset.
pub fn invoice_store() -> InMemoryStore<Invoice> {
    InMemoryStore::seeded(INVOICES.clone())
}

/// Builds a gazette store pre-loaded with the seed dataset.
pub fn gazette_store() -> InMemoryStore<GazetteUpdate> {
    InMemoryStore::seeded(GAZETTE_UPDATES.clone())
}

/// Builds an email account store pre-loaded with the seed dataset.
pub fn email_account_store() -> InMemoryStore<EmailAccount> {
    InMemoryStore::seeded(EMAIL_ACCOUNTS.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commercial::OpportunityPhase;

    #[test]
    fn datasets_are_non_empty() {
        assert!(!PROCESSES.is_empty());
        assert!(!CERTIFICATES.is_empty());
        assert!(!OPPORTUNITIES.is_empty());
        assert!(!REQUISITIONS.is_empty());
        assert!(!COMPANIES.is_empty());
        assert!(!INVOICES.is_empty());
        assert!(!GAZETTE_UPDATES.is_empty());
        assert!(!EMAIL_ACCOUNTS.is_empty());
    }

    #[test]
    fn opportunities_cover_all_phases() {
        let phases: Vec<OpportunityPhase> = OPPORTUNITIES.iter().map(|o| o.phase()).collect();
        assert!(phases.contains(&OpportunityPhase::Triagem));
        assert!(phases.contains(&OpportunityPhase::Participacao));
        assert!(phases.contains(&OpportunityPhase::Finalizada));
    }

    #[test]
    fn invoices_span_two_months_of_paid_revenue() {
        let paid: Vec<_> = INVOICES
            .iter()
            .filter(|i| i.status() == InvoiceStatus::Paga)
            .collect();
        assert!(paid.len() >= 3);
        let months: std::collections::HashSet<u32> =
            paid.iter().map(|i| i.emitida_em().month()).collect();
        assert!(months.len() >= 2);
    }

    #[tokio::test]
    async fn seeded_stores_list_their_datasets() {
        use crate::domain::foundation::Store;

        assert_eq!(
            process_store().list().await.unwrap().len(),
            PROCESSES.len()
        );
        assert_eq!(
            gazette_store().list().await.unwrap().len(),
            GAZETTE_UPDATES.len()
        );
    }

    #[test]
    fn gazette_seed_has_a_pending_review_entry() {
        assert!(GAZETTE_UPDATES.iter().any(|u| u.is_pending_review()));
    }
}
