use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityStatus, Sector};

/// HR contact sub-record of a partner company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HrContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A partner company offering placement positions.
///
/// `active_users`, `total_hired`, `last_contact`, and `status` are
/// store-maintained statistics, zeroed/stamped at creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub cnpj: String,
    pub sector: Sector,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hr_contact: HrContact,
    /// Open position labels. Growable; serializes as `[]` when empty, never null.
    #[serde(default)]
    pub available_positions: Vec<String>,
    pub observations: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_users: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hired: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
}

/// Draft company, as collected by the company form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub cnpj: String,
    pub sector: Sector,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hr_contact: HrContact,
    #[serde(default)]
    pub available_positions: Vec<String>,
    pub observations: String,
}
