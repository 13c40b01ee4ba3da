//! Parent-interview update builder.

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::enums::{AutonomyLevel, ParticipationLevel};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentInterviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_entrevista: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrevistador: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participacao_familiar: Option<ParticipationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parecer_apoio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimulo_autonomia: Option<AutonomyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registros_protecao: Option<String>,
}

pub struct ParentInterviewUpdateBuilder(ParentInterviewUpdate);

impl ParentInterviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ParentInterviewUpdate::default())
    }

    #[must_use]
    pub fn data_entrevista(mut self, data_entrevista: NaiveDate) -> Self {
        self.0.data_entrevista = Some(data_entrevista);
        self
    }

    #[must_use]
    pub fn entrevistador(mut self, entrevistador: impl Into<String>) -> Self {
        self.0.entrevistador = Some(entrevistador.into());
        self
    }

    #[must_use]
    pub fn resumo(mut self, resumo: impl Into<String>) -> Self {
        self.0.resumo = Some(resumo.into());
        self
    }

    #[must_use]
    pub fn participacao_familiar(mut self, participacao_familiar: ParticipationLevel) -> Self {
        self.0.participacao_familiar = Some(participacao_familiar);
        self
    }

    #[must_use]
    pub fn parecer_apoio(mut self, parecer_apoio: impl Into<String>) -> Self {
        self.0.parecer_apoio = Some(parecer_apoio.into());
        self
    }

    #[must_use]
    pub fn estimulo_autonomia(mut self, estimulo_autonomia: AutonomyLevel) -> Self {
        self.0.estimulo_autonomia = Some(estimulo_autonomia);
        self
    }

    #[must_use]
    pub fn registros_protecao(mut self, registros_protecao: impl Into<String>) -> Self {
        self.0.registros_protecao = Some(registros_protecao.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ParentInterviewUpdate {
        self.0
    }
}

impl Default for ParentInterviewUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
