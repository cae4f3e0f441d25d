//! Product-update wizard - the four-step regulatory update flow.
//!
//! Step order: product selection, regulatory area, documentation
//! generation, instruction availability. The documentation step is the
//! strict one: it refuses to advance until the main file name is set, the
//! petitioning protocol is chosen, and at least one conforming document
//! is attached.

use crate::domain::foundation::AttachmentPolicy;
use crate::domain::wizard::{AttachmentsConform, Step, StepDefinition, StepSequence};

/// Field keys of the product-update wizard.
pub mod fields {
    pub const PRODUTO: &str = "produto";
    pub const AREA_REGULATORIA: &str = "area_regulatoria";
    pub const NOME_ARQUIVO_PRINCIPAL: &str = "nome_arquivo_principal";
    pub const PROTOCOLO_PETICIONAMENTO: &str = "protocolo_peticionamento";
    pub const DOCUMENTOS: &str = "documentos";
    pub const CANAL_DISPONIBILIZACAO: &str = "canal_disponibilizacao";
}

/// Steps of the product-update wizard, in breadcrumb order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductUpdateStep {
    SelecaoProduto,
    DefinicaoArea,
    GeracaoDocumentacao,
    DisponibilizacaoInstrucao,
}

impl Step for ProductUpdateStep {
    fn label(&self) -> &'static str {
        match self {
            ProductUpdateStep::SelecaoProduto => "Seleção do Produto",
            ProductUpdateStep::DefinicaoArea => "Definição da Área",
            ProductUpdateStep::GeracaoDocumentacao => "Geração da Documentação",
            ProductUpdateStep::DisponibilizacaoInstrucao => "Disponibilização da Instrução",
        }
    }
}

/// Builds the product-update step sequence with the given attachment
/// policy applied to the documentation step.
pub fn sequence(policy: AttachmentPolicy) -> StepSequence<ProductUpdateStep> {
    StepSequence::new(vec![
        StepDefinition::new(ProductUpdateStep::SelecaoProduto).require(fields::PRODUTO),
        StepDefinition::new(ProductUpdateStep::DefinicaoArea).require(fields::AREA_REGULATORIA),
        StepDefinition::new(ProductUpdateStep::GeracaoDocumentacao)
            .require(fields::NOME_ARQUIVO_PRINCIPAL)
            .require(fields::PROTOCOLO_PETICIONAMENTO)
            .require(fields::DOCUMENTOS)
            .rule(AttachmentsConform::new(fields::DOCUMENTOS, policy)),
        StepDefinition::new(ProductUpdateStep::DisponibilizacaoInstrucao)
            .require(fields::CANAL_DISPONIBILIZACAO),
    ])
    .expect("product-update sequence is statically valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AttachmentReference;
    use crate::domain::wizard::WizardController;

    fn wizard() -> WizardController<ProductUpdateStep> {
        WizardController::new(sequence(AttachmentPolicy::default()))
    }

    fn attachment(name: &str, size: u64) -> AttachmentReference {
        AttachmentReference::new(name, size).unwrap()
    }

    fn fill_through_documentation(wizard: &mut WizardController<ProductUpdateStep>) {
        wizard.set_field(fields::PRODUTO, "Ventilador Pulmonar VX-200");
        wizard.advance().unwrap();
        wizard.set_field(fields::AREA_REGULATORIA, "equipamentos_medicos");
        wizard.advance().unwrap();
        wizard.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao_registro.pdf");
        wizard.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.123456/2026-11");
        wizard.push_to_list(fields::DOCUMENTOS, attachment("dossie.pdf", 2048));
    }

    #[test]
    fn documentation_step_blocks_until_all_three_conditions_hold() {
        let mut w = wizard();
        w.set_field(fields::PRODUTO, "Ventilador Pulmonar VX-200");
        w.advance().unwrap();
        w.set_field(fields::AREA_REGULATORIA, "equipamentos_medicos");
        w.advance().unwrap();

        // Nothing filled: three reasons
        let err = w.advance().unwrap_err();
        assert_eq!(err.reasons().len(), 3);

        // File name alone is not enough
        w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao.pdf");
        let err = w.advance().unwrap_err();
        assert_eq!(err.reasons().len(), 2);

        // Protocol set, still no documents
        w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.123456/2026-11");
        let err = w.advance().unwrap_err();
        assert_eq!(err.reasons(), ["Field 'documentos' is required"]);

        // All three hold: advances
        w.push_to_list(fields::DOCUMENTOS, attachment("dossie.pdf", 2048));
        assert_eq!(
            w.advance().unwrap(),
            ProductUpdateStep::DisponibilizacaoInstrucao
        );
    }

    #[test]
    fn documentation_step_enforces_attachment_policy() {
        let mut w = wizard();
        w.set_field(fields::PRODUTO, "Oxímetro");
        w.advance().unwrap();
        w.set_field(fields::AREA_REGULATORIA, "produtos_para_saude");
        w.advance().unwrap();
        w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao.pdf");
        w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.000001/2026-07");
        w.push_to_list(fields::DOCUMENTOS, attachment("planilha.xlsx", 100));

        let err = w.advance().unwrap_err();
        assert!(err.reasons()[0].contains("planilha.xlsx"));
    }

    #[test]
    fn uppercase_pdf_extension_is_accepted() {
        let mut w = wizard();
        w.set_field(fields::PRODUTO, "Oxímetro");
        w.advance().unwrap();
        w.set_field(fields::AREA_REGULATORIA, "produtos_para_saude");
        w.advance().unwrap();
        w.set_field(fields::NOME_ARQUIVO_PRINCIPAL, "atualizacao.pdf");
        w.set_field(fields::PROTOCOLO_PETICIONAMENTO, "25351.000001/2026-07");
        w.push_to_list(fields::DOCUMENTOS, attachment("relatorio.PDF", 1024));

        assert!(w.advance().is_ok());
    }

    #[test]
    fn breadcrumb_jump_to_final_step_refused_from_first_step() {
        let mut w = wizard();
        let err = w
            .jump_to(ProductUpdateStep::DisponibilizacaoInstrucao)
            .unwrap_err();
        assert!(err.reasons()[0].contains("Disponibilização da Instrução"));
    }

    #[test]
    fn breadcrumb_jump_succeeds_after_completing_first_three_steps() {
        let mut w = wizard();
        fill_through_documentation(&mut w);
        w.advance().unwrap();

        // Back on the first breadcrumb, the final one is now reachable.
        w.jump_to(ProductUpdateStep::SelecaoProduto).unwrap();
        assert_eq!(
            w.jump_to(ProductUpdateStep::DisponibilizacaoInstrucao).unwrap(),
            ProductUpdateStep::DisponibilizacaoInstrucao
        );
    }

    #[test]
    fn full_flow_submits_accumulated_data() {
        let mut w = wizard();
        fill_through_documentation(&mut w);
        w.advance().unwrap();
        w.set_field(fields::CANAL_DISPONIBILIZACAO, "Portal do cliente");

        let mut saved = None;
        w.submit(|data| saved = Some(data.clone())).unwrap();

        let saved = saved.unwrap();
        assert_eq!(saved.text(fields::PRODUTO), Some("Ventilador Pulmonar VX-200"));
        assert_eq!(saved.list_len(fields::DOCUMENTOS), 1);
    }
}
