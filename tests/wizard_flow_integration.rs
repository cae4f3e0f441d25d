//! Integration tests for the gated wizard flows.
//!
//! These tests drive the product-update wizard end-to-end the way the
//! UI shell would:
//! 1. Open a session in the registry
//! 2. Fill fields step by step, exercising the gating rules
//! 3. Submit through the command handler into the in-memory store
//!
//! Uses in-memory adapters throughout; no external dependencies.

use std::sync::Arc;

use caduceu_backoffice::adapters::memory::InMemoryStore;
use caduceu_backoffice::adapters::notify::RecordingNotifier;
use caduceu_backoffice::application::handlers::{
    SubmitProductUpdateCommand, SubmitProductUpdateError, SubmitProductUpdateHandler,
};
use caduceu_backoffice::application::WizardSessions;
use caduceu_backoffice::domain::foundation::{
    AttachmentPolicy, AttachmentReference, Severity, Store,
};
use caduceu_backoffice::domain::regulatory::product_update::{self, fields};
use caduceu_backoffice::domain::regulatory::{ProductUpdateStep, RegulatoryProcess};

fn sessions() -> Arc<WizardSessions<ProductUpdateStep>> {
    Arc::new(WizardSessions::new(|| {
        product_update::sequence(AttachmentPolicy::default())
    }))
}

fn handler(
    sessions: &Arc<WizardSessions<ProductUpdateStep>>,
) -> (
    Arc<InMemoryStore<RegulatoryProcess>>,
    Arc<RecordingNotifier>,
    SubmitProductUpdateHandler,
) {
    let processes = Arc::new(InMemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let handler =
        SubmitProductUpdateHandler::new(sessions.clone(), processes.clone(), notifier.clone());
    (processes, notifier, handler)
}

fn pdf(name: &str, size: u64) -> AttachmentReference {
    AttachmentReference::new(name, size).unwrap()
}

#[tokio::test]
async fn full_product_update_flow_lands_in_the_store() {
    let sessions = sessions();
    let (processes, notifier, handler) = handler(&sessions);

    let wizard_id = sessions.open();
    sessions
        .with(wizard_id, |w| {
            // Step 1: product selection
            w.set_field(fields::PRODUTO, "Monitor Multiparamétrico MX-550");
            w.advance().unwrap();

            // Step 2: regulatory area
            w.set_field(fields::AREA_REGULATORIA, "equipamentos_medicos");
            w.advance().unwrap();

            // Step 3: documentation generation
            w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao_registro.pdf");
            w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.421337/2026-81");
            w.push_to_list(fields::DOCUMENTOS, pdf("dossie_tecnico.pdf", 2_048_000));
            w.push_to_list(fields::DOCUMENTOS, pdf("relatorio.PDF", 512_000));
            w.advance().unwrap();

            // Step 4: instruction availability
            w.set_field(fields::CANAL_DISPONIBILIZACAO, "Portal do cliente");
        })
        .unwrap();

    let result = handler
        .handle(SubmitProductUpdateCommand {
            wizard_id,
            process_id: None,
            actor: "ana.reis".to_string(),
        })
        .await
        .unwrap();

    let stored = processes
        .find_by_id(result.process_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.produto(), "Monitor Multiparamétrico MX-550");
    // Main file plus the two attachments
    assert_eq!(stored.documentos_len(), 3);
    assert!(notifier
        .notices()
        .iter()
        .any(|n| n.severity == Severity::Success));
    assert!(!sessions.is_open(wizard_id));
}

#[tokio::test]
async fn documentation_step_blocks_until_every_condition_holds() {
    let sessions = sessions();
    let wizard_id = sessions.open();

    sessions
        .with(wizard_id, |w| {
            w.set_field(fields::PRODUTO, "Oxímetro OX-10");
            w.advance().unwrap();
            w.set_field(fields::AREA_REGULATORIA, "produtos_para_saude");
            w.advance().unwrap();

            // All three requirements missing
            let err = w.advance().unwrap_err();
            assert_eq!(err.reasons().len(), 3);

            // One by one
            w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao.pdf");
            assert_eq!(w.advance().unwrap_err().reasons().len(), 2);

            w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.000001/2026-07");
            assert_eq!(w.advance().unwrap_err().reasons().len(), 1);

            w.push_to_list(fields::DOCUMENTOS, pdf("dossie.pdf", 1024));
            assert!(w.advance().is_ok());
        })
        .unwrap();
}

#[tokio::test]
async fn file_size_boundary_is_exact() {
    let sessions = sessions();
    let wizard_id = sessions.open();

    sessions
        .with(wizard_id, |w| {
            w.set_field(fields::PRODUTO, "Ventilador VP-300");
            w.advance().unwrap();
            w.set_field(fields::AREA_REGULATORIA, "equipamentos_medicos");
            w.advance().unwrap();
            w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao.pdf");
            w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.000002/2026-12");

            // Exactly 10 MiB: accepted
            w.push_to_list(fields::DOCUMENTOS, pdf("no_limite.pdf", 10_485_760));
            assert!(w.advance().is_ok());
            w.retreat();

            // One byte over: rejected with a size reason
            w.push_to_list(fields::DOCUMENTOS, pdf("acima.pdf", 10_485_761));
            let err = w.advance().unwrap_err();
            assert!(err.reasons()[0].contains("acima.pdf"));
        })
        .unwrap();
}

#[tokio::test]
async fn breadcrumb_jump_rules_match_the_visited_set() {
    let sessions = sessions();
    let wizard_id = sessions.open();

    sessions
        .with(wizard_id, |w| {
            // Jumping ahead from the first step is refused.
            assert!(w.jump_to(ProductUpdateStep::DisponibilizacaoInstrucao).is_err());

            // Complete steps 1-3.
            w.set_field(fields::PRODUTO, "Monitor MX-550");
            w.advance().unwrap();
            w.set_field(fields::AREA_REGULATORIA, "equipamentos_medicos");
            w.advance().unwrap();
            w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao.pdf");
            w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.000003/2026-44");
            w.push_to_list(fields::DOCUMENTOS, pdf("dossie.pdf", 1024));
            w.advance().unwrap();

            // Back to the start via breadcrumb, then straight to the end.
            w.jump_to(ProductUpdateStep::SelecaoProduto).unwrap();
            assert_eq!(
                w.jump_to(ProductUpdateStep::DisponibilizacaoInstrucao).unwrap(),
                ProductUpdateStep::DisponibilizacaoInstrucao
            );
        })
        .unwrap();
}

#[tokio::test]
async fn retreat_preserves_later_input() {
    let sessions = sessions();
    let wizard_id = sessions.open();

    sessions
        .with(wizard_id, |w| {
            w.set_field(fields::PRODUTO, "Monitor MX-550");
            w.advance().unwrap();
            w.set_field(fields::AREA_REGULATORIA, "equipamentos_medicos");

            w.retreat();
            w.set_field(fields::PRODUTO, "Monitor MX-560");
            w.advance().unwrap();

            // The area chosen before retreating is still there.
            assert_eq!(
                w.data().text(fields::AREA_REGULATORIA),
                Some("equipamentos_medicos")
            );
        })
        .unwrap();
}

#[tokio::test]
async fn cancel_then_reopen_yields_empty_data() {
    let sessions = sessions();

    let first = sessions.open();
    sessions
        .with(first, |w| {
            w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "digitado_e_abandonado.pdf");
        })
        .unwrap();
    assert!(sessions.cancel(first));

    let second = sessions.open();
    sessions
        .with(second, |w| {
            assert!(w.data().is_empty());
            assert!(w.data().is_blank(fields::NOME_ARQUIVO_PRINCIPAL));
        })
        .unwrap();
}

#[tokio::test]
async fn blocked_submission_surfaces_warnings_and_keeps_session() {
    let sessions = sessions();
    let (processes, notifier, handler) = handler(&sessions);
    let wizard_id = sessions.open();

    let result = handler
        .handle(SubmitProductUpdateCommand {
            wizard_id,
            process_id: None,
            actor: "ana.reis".to_string(),
        })
        .await;

    assert!(matches!(result, Err(SubmitProductUpdateError::Blocked(_))));
    assert!(sessions.is_open(wizard_id));
    assert!(processes.list().await.unwrap().is_empty());
    assert!(notifier
        .notices()
        .iter()
        .all(|n| n.severity == Severity::Warning));
}
