use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cafeteria_core::{DomainError, EmployeeId, Entity};

/// Staff role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    Waiter,
    Barista,
    Manager,
}

impl EmployeeRole {
    pub const ALL: [EmployeeRole; 3] = [
        EmployeeRole::Waiter,
        EmployeeRole::Barista,
        EmployeeRole::Manager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Waiter => "Waiter",
            EmployeeRole::Barista => "Barista",
            EmployeeRole::Manager => "Manager",
        }
    }
}

impl core::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown employee role: {s}")))
    }
}

/// A staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    role: EmployeeRole,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: EmployeeRole) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            role,
        }
    }

    pub fn id_typed(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> EmployeeRole {
        self.role
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("barista".parse::<EmployeeRole>().unwrap(), EmployeeRole::Barista);
        assert_eq!(" Manager ".parse::<EmployeeRole>().unwrap(), EmployeeRole::Manager);
    }

    #[test]
    fn unknown_role_is_a_validation_error() {
        let err = "sommelier".parse::<EmployeeRole>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn employee_displays_name_and_role() {
        let employee = Employee::new("María", EmployeeRole::Barista);
        assert_eq!(employee.to_string(), "María - Barista");
    }

    #[test]
    fn same_name_different_identity() {
        let a = Employee::new("Ana", EmployeeRole::Waiter);
        let b = Employee::new("Ana", EmployeeRole::Waiter);
        assert_ne!(a.id(), b.id());
    }
}
