//! Follow-up visit update builder.

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::enums::PerformanceLevel;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpVisitUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_visita: Option<NaiveDate>,
    #[serde(rename = "responsavelRH", skip_serializing_if = "Option::is_none")]
    pub responsavel_rh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pontualidade: Option<PerformanceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integracao: Option<PerformanceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relacionamento: Option<PerformanceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execucao_tarefas: Option<PerformanceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parecer_geral: Option<PerformanceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

pub struct FollowUpVisitUpdateBuilder(FollowUpVisitUpdate);

impl FollowUpVisitUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(FollowUpVisitUpdate::default())
    }

    #[must_use]
    pub fn empresa(mut self, empresa: impl Into<String>) -> Self {
        self.0.empresa = Some(empresa.into());
        self
    }

    #[must_use]
    pub fn data_visita(mut self, data_visita: NaiveDate) -> Self {
        self.0.data_visita = Some(data_visita);
        self
    }

    #[must_use]
    pub fn responsavel_rh(mut self, responsavel_rh: impl Into<String>) -> Self {
        self.0.responsavel_rh = Some(responsavel_rh.into());
        self
    }

    #[must_use]
    pub fn pontualidade(mut self, pontualidade: PerformanceLevel) -> Self {
        self.0.pontualidade = Some(pontualidade);
        self
    }

    #[must_use]
    pub fn integracao(mut self, integracao: PerformanceLevel) -> Self {
        self.0.integracao = Some(integracao);
        self
    }

    #[must_use]
    pub fn relacionamento(mut self, relacionamento: PerformanceLevel) -> Self {
        self.0.relacionamento = Some(relacionamento);
        self
    }

    #[must_use]
    pub fn execucao_tarefas(mut self, execucao_tarefas: PerformanceLevel) -> Self {
        self.0.execucao_tarefas = Some(execucao_tarefas);
        self
    }

    #[must_use]
    pub fn parecer_geral(mut self, parecer_geral: PerformanceLevel) -> Self {
        self.0.parecer_geral = Some(parecer_geral);
        self
    }

    #[must_use]
    pub fn observacoes(mut self, observacoes: impl Into<String>) -> Self {
        self.0.observacoes = Some(observacoes.into());
        self
    }

    #[must_use]
    pub fn build(self) -> FollowUpVisitUpdate {
        self.0
    }
}

impl Default for FollowUpVisitUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
