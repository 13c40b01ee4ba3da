//! Company update builder.

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::entities::HrContact;
use amparo_core::enums::{ActivityStatus, Sector};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_contact: Option<HrContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_positions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_users: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hired: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
}

pub struct CompanyUpdateBuilder(CompanyUpdate);

impl CompanyUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CompanyUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.0.cnpj = Some(cnpj.into());
        self
    }

    #[must_use]
    pub fn sector(mut self, sector: Sector) -> Self {
        self.0.sector = Some(sector);
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
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn hr_contact(mut self, hr_contact: HrContact) -> Self {
        self.0.hr_contact = Some(hr_contact);
        self
    }

    #[must_use]
    pub fn available_positions(mut self, available_positions: Vec<String>) -> Self {
        self.0.available_positions = Some(available_positions);
        self
    }

    #[must_use]
    pub fn observations(mut self, observations: impl Into<String>) -> Self {
        self.0.observations = Some(observations.into());
        self
    }

    #[must_use]
    pub fn active_users(mut self, active_users: u32) -> Self {
        self.0.active_users = Some(active_users);
        self
    }

    #[must_use]
    pub fn total_hired(mut self, total_hired: u32) -> Self {
        self.0.total_hired = Some(total_hired);
        self
    }

    #[must_use]
    pub fn last_contact(mut self, last_contact: NaiveDate) -> Self {
        self.0.last_contact = Some(last_contact);
        self
    }

    #[must_use]
    pub fn status(mut self, status: ActivityStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> CompanyUpdate {
        self.0
    }
}

impl Default for CompanyUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
