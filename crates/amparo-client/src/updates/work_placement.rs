//! Work-placement update builder.

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::enums::PlacementStatus;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPlacementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_admissao: Option<NaiveDate>,
    #[serde(rename = "contatoRH", skip_serializing_if = "Option::is_none")]
    pub contato_rh: Option<String>,
    #[serde(rename = "telefoneRH", skip_serializing_if = "Option::is_none")]
    pub telefone_rh: Option<String>,
    #[serde(
        rename = "dataProvaveDesligamento",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_provavel_desligamento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PlacementStatus>,
}

pub struct WorkPlacementUpdateBuilder(WorkPlacementUpdate);

impl WorkPlacementUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(WorkPlacementUpdate::default())
    }

    #[must_use]
    pub fn empresa(mut self, empresa: impl Into<String>) -> Self {
        self.0.empresa = Some(empresa.into());
        self
    }

    #[must_use]
    pub fn cargo(mut self, cargo: impl Into<String>) -> Self {
        self.0.cargo = Some(cargo.into());
        self
    }

    #[must_use]
    pub fn data_admissao(mut self, data_admissao: NaiveDate) -> Self {
        self.0.data_admissao = Some(data_admissao);
        self
    }

    #[must_use]
    pub fn contato_rh(mut self, contato_rh: impl Into<String>) -> Self {
        self.0.contato_rh = Some(contato_rh.into());
        self
    }

    #[must_use]
    pub fn telefone_rh(mut self, telefone_rh: impl Into<String>) -> Self {
        self.0.telefone_rh = Some(telefone_rh.into());
        self
    }

    #[must_use]
    pub fn data_provavel_desligamento(mut self, data: NaiveDate) -> Self {
        self.0.data_provavel_desligamento = Some(data);
        self
    }

    #[must_use]
    pub fn status(mut self, status: PlacementStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> WorkPlacementUpdate {
        self.0
    }
}

impl Default for WorkPlacementUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
