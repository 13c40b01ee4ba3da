use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PlacementStatus;

/// A job placement ("encaminhamento") of a participant at a partner company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkPlacement {
    pub id: String,
    pub usuario_id: String,
    pub usuario_nome: String,
    pub empresa: String,
    pub cargo: String,
    pub data_admissao: NaiveDate,
    #[serde(rename = "contatoRH")]
    pub contato_rh: String,
    #[serde(rename = "telefoneRH")]
    pub telefone_rh: String,
    /// Expected end date. The document key keeps the collection's historical
    /// spelling.
    #[serde(rename = "dataProvaveDesligamento")]
    pub data_provavel_desligamento: NaiveDate,
    pub status: PlacementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Draft placement. `usuario_nome` is filled in from the loaded participant
/// list before submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkPlacement {
    pub usuario_id: String,
    #[serde(default)]
    pub usuario_nome: String,
    pub empresa: String,
    pub cargo: String,
    pub data_admissao: NaiveDate,
    #[serde(rename = "contatoRH")]
    pub contato_rh: String,
    #[serde(rename = "telefoneRH")]
    pub telefone_rh: String,
    #[serde(rename = "dataProvaveDesligamento")]
    pub data_provavel_desligamento: NaiveDate,
    pub status: PlacementStatus,
}
