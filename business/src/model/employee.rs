use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Resource, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeRole {
    Admin,
    Manager,
    Driver,
    Employee,
}

impl EmployeeRole {
    pub const ALL: [Self; 4] = [Self::Admin, Self::Manager, Self::Driver, Self::Employee];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Driver => "DRIVER",
            Self::Employee => "EMPLOYEE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrateur",
            Self::Manager => "Responsable",
            Self::Driver => "Chauffeur",
            Self::Employee => "Employé",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub status: Status,
    #[serde(default)]
    pub subsidiary_id: Option<u64>,
    #[serde(default)]
    pub subsidiary_name: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: EmployeeRole,
    pub subsidiary_id: Option<u64>,
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            role: employee.role,
            subsidiary_id: employee.subsidiary_id,
        }
    }
}

impl Resource for Employee {
    type Id = u64;
    type Draft = EmployeeDraft;

    const PATH: &'static str = "employees";

    fn id(&self) -> &u64 {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_deserializes_camel_case_with_optional_fields() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": 7,
            "firstName": "Jeanne",
            "lastName": "Martin",
            "email": "jeanne.martin@example.com",
            "role": "DRIVER",
            "status": "ENABLED"
        }))
        .expect("employee should deserialize");

        assert_eq!(employee.full_name(), "Jeanne Martin");
        assert_eq!(employee.role, EmployeeRole::Driver);
        assert!(employee.phone.is_none());
        assert!(employee.subsidiary_name.is_none());
    }
}
