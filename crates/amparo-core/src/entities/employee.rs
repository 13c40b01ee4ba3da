use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityStatus, Department, Permission, StaffRole};

/// An internal staff member ("funcionário").
///
/// The plaintext `password` travels in the collection payload; the login
/// check is a linear scan over this collection. `salary` is a
/// display-formatted currency string, stored exactly as entered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub rg: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub role: StaffRole,
    pub department: Department,
    pub admission_date: NaiveDate,
    pub salary: String,
    pub work_schedule: String,
    pub observations: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
    /// Empty string until the first login is recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visits_count: Option<u32>,
}

/// Draft staff record, as collected by the staff form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub rg: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub role: StaffRole,
    pub department: Department,
    pub admission_date: NaiveDate,
    pub salary: String,
    pub work_schedule: String,
    pub observations: String,
    pub password: String,
}
