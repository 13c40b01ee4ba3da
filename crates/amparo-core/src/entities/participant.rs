use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityStatus;

/// A program participant ("usuário"), registered at admission.
///
/// `status` and `created_at` are stamped by the client at creation time;
/// records imported from older datasets may lack them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub rg: String,
    pub cpf: String,
    pub address: String,
    pub phone: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub emergency_contact: String,
    pub admission_date: NaiveDate,
    pub observations: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Draft participant, as collected by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewParticipant {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub rg: String,
    pub cpf: String,
    pub address: String,
    pub phone: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub emergency_contact: String,
    pub admission_date: NaiveDate,
    pub observations: String,
}
