//! Participant update builder.

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::enums::ActivityStatus;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
}

pub struct ParticipantUpdateBuilder(ParticipantUpdate);

impl ParticipantUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ParticipantUpdate::default())
    }

    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.0.full_name = Some(full_name.into());
        self
    }

    #[must_use]
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.0.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub fn rg(mut self, rg: impl Into<String>) -> Self {
        self.0.rg = Some(rg.into());
        self
    }

    #[must_use]
    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.0.cpf = Some(cpf.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.0.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.0.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn parent_name(mut self, parent_name: impl Into<String>) -> Self {
        self.0.parent_name = Some(parent_name.into());
        self
    }

    #[must_use]
    pub fn parent_phone(mut self, parent_phone: impl Into<String>) -> Self {
        self.0.parent_phone = Some(parent_phone.into());
        self
    }

    #[must_use]
    pub fn emergency_contact(mut self, emergency_contact: impl Into<String>) -> Self {
        self.0.emergency_contact = Some(emergency_contact.into());
        self
    }

    #[must_use]
    pub fn admission_date(mut self, admission_date: NaiveDate) -> Self {
        self.0.admission_date = Some(admission_date);
        self
    }

    #[must_use]
    pub fn observations(mut self, observations: impl Into<String>) -> Self {
        self.0.observations = Some(observations.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ActivityStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> ParticipantUpdate {
        self.0
    }
}

impl Default for ParticipantUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
