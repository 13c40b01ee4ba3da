use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Employee;
use crate::enums::{Permission, StaffRole};

/// Public profile of the authenticated staff member.
///
/// Produced by the session container at login, persisted to the durable
/// side channel, and read back on restore. Never carries the credential.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: StaffRole,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Identity {
    /// Extract the public fields of a matched employee record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            role: employee.role,
            permissions: employee.permissions.clone().unwrap_or_default(),
        }
    }
}
