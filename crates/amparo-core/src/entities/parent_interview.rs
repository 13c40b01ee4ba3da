use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AutonomyLevel, ParticipationLevel};

/// A parent/guardian interview record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParentInterview {
    pub id: String,
    pub usuario_id: String,
    pub usuario_nome: String,
    pub data_entrevista: NaiveDate,
    pub entrevistador: String,
    pub resumo: String,
    pub participacao_familiar: ParticipationLevel,
    pub parecer_apoio: String,
    pub estimulo_autonomia: AutonomyLevel,
    /// Notes on overprotection signs observed in the family.
    pub registros_protecao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Draft interview. `usuario_nome` is filled in from the loaded participant
/// list before submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewParentInterview {
    pub usuario_id: String,
    #[serde(default)]
    pub usuario_nome: String,
    pub data_entrevista: NaiveDate,
    pub entrevistador: String,
    pub resumo: String,
    pub participacao_familiar: ParticipationLevel,
    pub parecer_apoio: String,
    pub estimulo_autonomia: AutonomyLevel,
    pub registros_protecao: String,
}
