use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PerformanceLevel;

/// A post-placement follow-up visit to the participant's workplace.
///
/// Four dimension ratings plus an overall assessment, all drawn from the same
/// fixed performance scale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpVisit {
    pub id: String,
    pub usuario_id: String,
    pub usuario_nome: String,
    pub empresa: String,
    pub data_visita: NaiveDate,
    /// HR representative interviewed during the visit.
    #[serde(rename = "responsavelRH")]
    pub responsavel_rh: String,
    pub pontualidade: PerformanceLevel,
    pub integracao: PerformanceLevel,
    pub relacionamento: PerformanceLevel,
    pub execucao_tarefas: PerformanceLevel,
    pub parecer_geral: PerformanceLevel,
    pub observacoes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Draft visit. `usuario_nome` is filled in from the loaded participant list
/// before submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewFollowUpVisit {
    pub usuario_id: String,
    #[serde(default)]
    pub usuario_nome: String,
    pub empresa: String,
    pub data_visita: NaiveDate,
    #[serde(rename = "responsavelRH")]
    pub responsavel_rh: String,
    pub pontualidade: PerformanceLevel,
    pub integracao: PerformanceLevel,
    pub relacionamento: PerformanceLevel,
    pub execucao_tarefas: PerformanceLevel,
    pub parecer_geral: PerformanceLevel,
    pub observacoes: String,
}
