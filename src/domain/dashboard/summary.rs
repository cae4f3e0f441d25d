//! Dashboard summary - figures derived from store contents.
//!
//! Every number here is computed from the underlying records at read
//! time; nothing is hard-coded. The month-over-month variance compares
//! the reference month against the previous calendar month.

use serde::{Deserialize, Serialize};

use crate::domain::billing::{Invoice, InvoiceStatus};
use crate::domain::commercial::{Opportunity, OpportunityStatus};
use crate::domain::foundation::Timestamp;
use crate::domain::regulatory::{Certificate, CertificateStatus, ProcessStatus, RegulatoryProcess};

/// Read-only snapshot of the back-office figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub processos_total: usize,
    pub processos_aprovados: usize,
    pub processos_em_exigencia: usize,
    /// Approved share of decided processes (0-100).
    pub taxa_aprovacao: u8,

    pub certificados_vigentes: usize,
    pub certificados_proximos_vencimento: usize,
    pub certificados_vencidos: usize,

    pub oportunidades_ativas: usize,
    pub oportunidades_vencidas: usize,
    /// Won share of concluded opportunities (0-100).
    pub taxa_exito: u8,

    /// Sum of paid invoices, all time.
    pub faturamento_recebido: f64,
    /// Sum of paid invoices issued in the reference month.
    pub faturamento_mes: f64,
    /// Month-over-month change of paid totals, in percent.
    /// None when the previous month had no paid invoices.
    pub variacao_mensal: Option<f64>,
}

/// Computes the summary for a reference instant (usually now).
pub fn summarize(
    processos: &[RegulatoryProcess],
    certificados: &[Certificate],
    oportunidades: &[Opportunity],
    faturas: &[Invoice],
    reference: Timestamp,
) -> DashboardSummary {
    let processos_aprovados = count_processes(processos, ProcessStatus::Aprovado);
    let processos_indeferidos = count_processes(processos, ProcessStatus::Indeferido);
    let decididos = processos_aprovados + processos_indeferidos;

    let oportunidades_vencidas = count_opportunities(oportunidades, OpportunityStatus::Vencida);
    let concluidas = oportunidades_vencidas
        + count_opportunities(oportunidades, OpportunityStatus::Perdida)
        + count_opportunities(oportunidades, OpportunityStatus::PerdidaTriagem);

    let paid_in = |month: &Timestamp| -> f64 {
        faturas
            .iter()
            .filter(|f| f.status() == InvoiceStatus::Paga)
            .filter(|f| f.emitida_em().same_month(month))
            .map(Invoice::valor)
            .sum()
    };
    let faturamento_mes = paid_in(&reference);
    let faturamento_mes_anterior = paid_in(&reference.previous_month());

    DashboardSummary {
        processos_total: processos.len(),
        processos_aprovados,
        processos_em_exigencia: count_processes(processos, ProcessStatus::ExigenciaTecnica),
        taxa_aprovacao: percent(processos_aprovados, decididos),

        certificados_vigentes: count_certificates(certificados, CertificateStatus::Vigente),
        certificados_proximos_vencimento: count_certificates(
            certificados,
            CertificateStatus::ProximoVencimento,
        ),
        certificados_vencidos: count_certificates(certificados, CertificateStatus::Vencida),

        oportunidades_ativas: oportunidades
            .iter()
            .filter(|o| {
                matches!(
                    o.status(),
                    OpportunityStatus::EmTriagem | OpportunityStatus::EmParticipacao
                )
            })
            .count(),
        oportunidades_vencidas,
        taxa_exito: percent(oportunidades_vencidas, concluidas),

        faturamento_recebido: faturas
            .iter()
            .filter(|f| f.status() == InvoiceStatus::Paga)
            .map(Invoice::valor)
            .sum(),
        faturamento_mes,
        variacao_mensal: if faturamento_mes_anterior > 0.0 {
            Some(
                (faturamento_mes - faturamento_mes_anterior) / faturamento_mes_anterior * 100.0,
            )
        } else {
            None
        },
    }
}

fn count_processes(processos: &[RegulatoryProcess], status: ProcessStatus) -> usize {
    processos.iter().filter(|p| p.status() == status).count()
}

fn count_certificates(certificados: &[Certificate], status: CertificateStatus) -> usize {
    certificados.iter().filter(|c| c.status() == status).count()
}

fn count_opportunities(oportunidades: &[Opportunity], status: OpportunityStatus) -> usize {
    oportunidades.iter().filter(|o| o.status() == status).count()
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        0
    } else {
        ((part * 100) / whole) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AttachmentReference;
    use crate::domain::regulatory::RegulatoryArea;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_rfc3339(s).unwrap()
    }

    fn process_with_status(status: ProcessStatus) -> RegulatoryProcess {
        let mut p =
            RegulatoryProcess::new("Equipamento", RegulatoryArea::EquipamentosMedicos).unwrap();
        if status != ProcessStatus::EmAnalise {
            // Walk the table instead of forcing, keeping the fixture honest.
            let path: &[ProcessStatus] = match status {
                ProcessStatus::ExigenciaTecnica => &[ProcessStatus::ExigenciaTecnica],
                ProcessStatus::Aprovado => &[ProcessStatus::Aprovado],
                ProcessStatus::Indeferido => &[ProcessStatus::Indeferido],
                ProcessStatus::Arquivado => &[ProcessStatus::Aprovado, ProcessStatus::Arquivado],
                ProcessStatus::EmAnalise => &[],
            };
            for step in path {
                p.transition_status(*step, "fixture").unwrap();
            }
        }
        p
    }

    fn certificate_with_status(status: CertificateStatus) -> Certificate {
        let mut c = Certificate::new(
            "CBPF-1",
            "ANVISA",
            ts("2026-01-01T00:00:00Z"),
            ts("2028-01-01T00:00:00Z"),
            vec![AttachmentReference::new("certidao.pdf", 10).unwrap()],
        )
        .unwrap();
        c.force_status(status);
        c
    }

    fn opportunity_with_status(status: OpportunityStatus) -> Opportunity {
        let mut o = Opportunity::new("Órgão", "Objeto", 1000.0).unwrap();
        match status {
            OpportunityStatus::EmTriagem => {}
            OpportunityStatus::PerdidaTriagem | OpportunityStatus::Cancelada => {
                o.transition_status(status, "fixture").unwrap();
            }
            OpportunityStatus::EmParticipacao => {
                o.transition_status(OpportunityStatus::EmParticipacao, "fixture")
                    .unwrap();
            }
            OpportunityStatus::Vencida | OpportunityStatus::Perdida => {
                o.transition_status(OpportunityStatus::EmParticipacao, "fixture")
                    .unwrap();
                o.transition_status(status, "fixture").unwrap();
            }
        }
        o
    }

    fn paid_invoice(valor: f64, emitida_em: &str) -> Invoice {
        let mut inv = Invoice::new(
            "NF-1",
            "Hospital",
            valor,
            ts(emitida_em),
            ts(emitida_em).add_days(30),
        )
        .unwrap();
        inv.transition_status(InvoiceStatus::Enviada).unwrap();
        inv.transition_status(InvoiceStatus::Paga).unwrap();
        inv
    }

    #[test]
    fn empty_inputs_produce_zeroed_summary() {
        let s = summarize(&[], &[], &[], &[], ts("2026-03-15T00:00:00Z"));
        assert_eq!(s.processos_total, 0);
        assert_eq!(s.taxa_aprovacao, 0);
        assert_eq!(s.taxa_exito, 0);
        assert_eq!(s.faturamento_recebido, 0.0);
        assert_eq!(s.variacao_mensal, None);
    }

    #[test]
    fn approval_rate_counts_only_decided_processes() {
        let processos = vec![
            process_with_status(ProcessStatus::Aprovado),
            process_with_status(ProcessStatus::Aprovado),
            process_with_status(ProcessStatus::Indeferido),
            process_with_status(ProcessStatus::EmAnalise),
        ];
        let s = summarize(&processos, &[], &[], &[], ts("2026-03-15T00:00:00Z"));

        assert_eq!(s.processos_total, 4);
        assert_eq!(s.processos_aprovados, 2);
        // 2 approved of 3 decided = 66%
        assert_eq!(s.taxa_aprovacao, 66);
    }

    #[test]
    fn certificate_counters_split_by_status() {
        let certificados = vec![
            certificate_with_status(CertificateStatus::Vigente),
            certificate_with_status(CertificateStatus::ProximoVencimento),
            certificate_with_status(CertificateStatus::Vencida),
        ];
        let s = summarize(&[], &certificados, &[], &[], ts("2026-03-15T00:00:00Z"));

        assert_eq!(s.certificados_vigentes, 1);
        assert_eq!(s.certificados_proximos_vencimento, 1);
        assert_eq!(s.certificados_vencidos, 1);
    }

    #[test]
    fn win_rate_ignores_still_open_opportunities() {
        let oportunidades = vec![
            opportunity_with_status(OpportunityStatus::Vencida),
            opportunity_with_status(OpportunityStatus::Perdida),
            opportunity_with_status(OpportunityStatus::EmTriagem),
            opportunity_with_status(OpportunityStatus::EmParticipacao),
        ];
        let s = summarize(&[], &[], &oportunidades, &[], ts("2026-03-15T00:00:00Z"));

        assert_eq!(s.oportunidades_ativas, 2);
        assert_eq!(s.oportunidades_vencidas, 1);
        // 1 won of 2 concluded = 50%
        assert_eq!(s.taxa_exito, 50);
    }

    #[test]
    fn revenue_sums_only_paid_invoices() {
        let mut unpaid = Invoice::new(
            "NF-2",
            "Hospital",
            999.0,
            ts("2026-03-02T00:00:00Z"),
            ts("2026-04-01T00:00:00Z"),
        )
        .unwrap();
        unpaid.transition_status(InvoiceStatus::Enviada).unwrap();

        let faturas = vec![paid_invoice(1000.0, "2026-03-02T00:00:00Z"), unpaid];
        let s = summarize(&[], &[], &[], &faturas, ts("2026-03-15T00:00:00Z"));

        assert_eq!(s.faturamento_recebido, 1000.0);
        assert_eq!(s.faturamento_mes, 1000.0);
    }

    #[test]
    fn month_over_month_variance_is_computed() {
        let faturas = vec![
            paid_invoice(1000.0, "2026-02-10T00:00:00Z"),
            paid_invoice(1500.0, "2026-03-05T00:00:00Z"),
        ];
        let s = summarize(&[], &[], &[], &faturas, ts("2026-03-15T00:00:00Z"));

        assert_eq!(s.faturamento_mes, 1500.0);
        assert_eq!(s.variacao_mensal, Some(50.0));
    }

    #[test]
    fn variance_is_none_without_previous_month_revenue() {
        let faturas = vec![paid_invoice(1500.0, "2026-03-05T00:00:00Z")];
        let s = summarize(&[], &[], &[], &faturas, ts("2026-03-15T00:00:00Z"));
        assert_eq!(s.variacao_mensal, None);
    }
}
