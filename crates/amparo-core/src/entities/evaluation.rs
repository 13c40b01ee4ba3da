use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EvaluationKind, ResponseLevel};

/// A trial-period evaluation of a participant.
///
/// `respostas` maps the fixed question index (0..=9, see
/// [`crate::catalog::TRIAL_QUESTIONS`]) to the selected response level.
/// `usuario_nome` is denormalized from the participant record so lists render
/// without a join.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: String,
    pub usuario_id: String,
    pub usuario_nome: String,
    pub tipo_avaliacao: EvaluationKind,
    pub data_avaliacao: NaiveDate,
    pub respostas: BTreeMap<u8, ResponseLevel>,
    pub observacoes: String,
    pub avaliador: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Draft evaluation. `usuario_nome` is filled in from the loaded participant
/// list before submission; callers may leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEvaluation {
    pub usuario_id: String,
    #[serde(default)]
    pub usuario_nome: String,
    pub tipo_avaliacao: EvaluationKind,
    pub data_avaliacao: NaiveDate,
    pub respostas: BTreeMap<u8, ResponseLevel>,
    pub observacoes: String,
    pub avaliador: String,
}
