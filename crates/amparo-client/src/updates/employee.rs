//! Staff update builder.

use chrono::NaiveDate;
use serde::Serialize;

use amparo_core::enums::{ActivityStatus, Department, Permission, StaffRole};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluations_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits_count: Option<u32>,
}

pub struct EmployeeUpdateBuilder(EmployeeUpdate);

impl EmployeeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(EmployeeUpdate::default())
    }

    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.0.full_name = Some(full_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.0.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.0.cpf = Some(cpf.into());
        self
    }

    #[must_use]
    pub fn rg(mut self, rg: impl Into<String>) -> Self {
        self.0.rg = Some(rg.into());
        self
    }

    #[must_use]
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.0.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.0.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: StaffRole) -> Self {
        self.0.role = Some(role);
        self
    }

    #[must_use]
    pub fn department(mut self, department: Department) -> Self {
        self.0.department = Some(department);
        self
    }

    #[must_use]
    pub fn admission_date(mut self, admission_date: NaiveDate) -> Self {
        self.0.admission_date = Some(admission_date);
        self
    }

    #[must_use]
    pub fn salary(mut self, salary: impl Into<String>) -> Self {
        self.0.salary = Some(salary.into());
        self
    }

    #[must_use]
    pub fn work_schedule(mut self, work_schedule: impl Into<String>) -> Self {
        self.0.work_schedule = Some(work_schedule.into());
        self
    }

    #[must_use]
    pub fn observations(mut self, observations: impl Into<String>) -> Self {
        self.0.observations = Some(observations.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.0.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ActivityStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.0.permissions = Some(permissions);
        self
    }

    #[must_use]
    pub fn last_login(mut self, last_login: impl Into<String>) -> Self {
        self.0.last_login = Some(last_login.into());
        self
    }

    #[must_use]
    pub fn evaluations_count(mut self, evaluations_count: u32) -> Self {
        self.0.evaluations_count = Some(evaluations_count);
        self
    }

    #[must_use]
    pub fn visits_count(mut self, visits_count: u32) -> Self {
        self.0.visits_count = Some(visits_count);
        self
    }

    #[must_use]
    pub fn build(self) -> EmployeeUpdate {
        self.0
    }
}

impl Default for EmployeeUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
