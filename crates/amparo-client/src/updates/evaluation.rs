//! Evaluation update builder.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::enums::{EvaluationKind, ResponseLevel};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_avaliacao: Option<EvaluationKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_avaliacao: Option<NaiveDate>,
    /// Full replacement of the response map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respostas: Option<BTreeMap<u8, ResponseLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avaliador: Option<String>,
}

pub struct EvaluationUpdateBuilder(EvaluationUpdate);

impl EvaluationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(EvaluationUpdate::default())
    }

    #[must_use]
    pub fn tipo_avaliacao(mut self, tipo_avaliacao: EvaluationKind) -> Self {
        self.0.tipo_avaliacao = Some(tipo_avaliacao);
        self
    }

    #[must_use]
    pub fn data_avaliacao(mut self, data_avaliacao: NaiveDate) -> Self {
        self.0.data_avaliacao = Some(data_avaliacao);
        self
    }

    #[must_use]
    pub fn respostas(mut self, respostas: BTreeMap<u8, ResponseLevel>) -> Self {
        self.0.respostas = Some(respostas);
        self
    }

    #[must_use]
    pub fn observacoes(mut self, observacoes: impl Into<String>) -> Self {
        self.0.observacoes = Some(observacoes.into());
        self
    }

    #[must_use]
    pub fn avaliador(mut self, avaliador: impl Into<String>) -> Self {
        self.0.avaliador = Some(avaliador.into());
        self
    }

    #[must_use]
    pub fn build(self) -> EvaluationUpdate {
        self.0
    }
}

impl Default for EvaluationUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
