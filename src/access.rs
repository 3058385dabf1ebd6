use crate::error::{PrivlabError, Result};
use std::fmt;

/// Roles known to the role-based model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Guest,
}

impl std::str::FromStr for Role {
    type Err = PrivlabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "guest" => Ok(Self::Guest),
            _ => Err(PrivlabError::InvalidFormat(format!("role: {}", s))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Guest => "GUEST",
        };
        write!(f, "{}", name)
    }
}

/// Permissions a role may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl std::str::FromStr for Permission {
    type Err = PrivlabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "delete" => Ok(Self::Delete),
            _ => Err(PrivlabError::InvalidFormat(format!("permission: {}", s))),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// The fixed role-to-permission table
pub fn role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => &[Permission::Read, Permission::Write, Permission::Delete],
        Role::User => &[Permission::Read, Permission::Write],
        Role::Guest => &[Permission::Read],
    }
}

/// Role-based check: the role must hold the requested permission
pub fn check_rbac(role: Role, permission: Permission) -> bool {
    role_permissions(role).contains(&permission)
}

/// Clearance levels for the attribute-based model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    High,
    Low,
}

impl std::str::FromStr for Clearance {
    type Err = PrivlabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            _ => Err(PrivlabError::InvalidFormat(format!("clearance: {}", s))),
        }
    }
}

impl fmt::Display for Clearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
        };
        write!(f, "{}", name)
    }
}

/// When the access is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTime {
    WorkingHours,
    NonWorkingHours,
}

impl std::str::FromStr for AccessTime {
    type Err = PrivlabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "working-hours" | "working_hours" => Ok(Self::WorkingHours),
            "non-working-hours" | "non_working_hours" => Ok(Self::NonWorkingHours),
            _ => Err(PrivlabError::InvalidFormat(format!("access time: {}", s))),
        }
    }
}

impl fmt::Display for AccessTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WorkingHours => "WORKING_HOURS",
            Self::NonWorkingHours => "NON_WORKING_HOURS",
        };
        write!(f, "{}", name)
    }
}

/// Subject attributes carried by an access request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest {
    pub department: String,
    pub clearance: Clearance,
    pub time: AccessTime,
}

impl AccessRequest {
    pub fn new(department: &str, clearance: Clearance, time: AccessTime) -> Self {
        Self {
            department: department.to_string(),
            clearance,
            time,
        }
    }
}

/// Attribute policy: every attribute must match for access to be granted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbacPolicy {
    pub department: String,
    pub clearance: Clearance,
    pub time: AccessTime,
}

impl Default for AbacPolicy {
    fn default() -> Self {
        Self {
            department: "IT".to_string(),
            clearance: Clearance::High,
            time: AccessTime::WorkingHours,
        }
    }
}

impl AbacPolicy {
    pub fn allows(&self, request: &AccessRequest) -> bool {
        request.department == self.department
            && request.clearance == self.clearance
            && request.time == self.time
    }
}
